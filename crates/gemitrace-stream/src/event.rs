use std::collections::BTreeMap;

/// Escalating urgency tag carried by every telemetry event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Inf,
    Dbg,
    Wrn,
    Err,
    Crt,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Inf,
        Severity::Dbg,
        Severity::Wrn,
        Severity::Err,
        Severity::Crt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Inf => "INF",
            Severity::Dbg => "DBG",
            Severity::Wrn => "WRN",
            Severity::Err => "ERR",
            Severity::Crt => "CRT",
        }
    }

    /// Display-only risk projection used by the trend chart.
    /// Not a computed risk model.
    pub fn risk_score(self) -> f64 {
        match self {
            Severity::Crt => 100.0,
            Severity::Err => 70.0,
            Severity::Wrn => 40.0,
            Severity::Dbg | Severity::Inf => 10.0,
        }
    }
}

/// Closed set of event categories emitted by the simulated platform.
///
/// The first five mirror the severity tags; the rest are named domain
/// events (compliance lifecycle, masking, security incidents, system
/// faults).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Inf,
    Dbg,
    Wrn,
    Err,
    Crt,
    ComplianceEvaluationStarted,
    ComplianceEvaluationCompleted,
    AccountNumberComplianceViolation,
    ComplianceAdaptationInitiated,
    ComplianceRuleAdapted,
    PromptProcessed,
    ServiceDiscovery,
    MaskingSensitivityAdjusted,
    AccountNumberComplianceChecked,
    AccountNumberMasked,
    ValidationAnomalyDetected,
    CircuitBreakerWarning,
    CircuitBreakerOpen,
    ComplianceSanctionCheckFailure,
    UserLoggedIn,
    SecurityEventDetected,
    DataBreachSuspected,
    UnauthorizedAccessAttempt,
    DatabaseConnectionFailed,
    TransactionRateLimitHit,
    ApiKeyCompromised,
    InsiderThreatDetected,
}

impl EventKind {
    pub const ALL: [EventKind; 27] = [
        EventKind::Inf,
        EventKind::Dbg,
        EventKind::Wrn,
        EventKind::Err,
        EventKind::Crt,
        EventKind::ComplianceEvaluationStarted,
        EventKind::ComplianceEvaluationCompleted,
        EventKind::AccountNumberComplianceViolation,
        EventKind::ComplianceAdaptationInitiated,
        EventKind::ComplianceRuleAdapted,
        EventKind::PromptProcessed,
        EventKind::ServiceDiscovery,
        EventKind::MaskingSensitivityAdjusted,
        EventKind::AccountNumberComplianceChecked,
        EventKind::AccountNumberMasked,
        EventKind::ValidationAnomalyDetected,
        EventKind::CircuitBreakerWarning,
        EventKind::CircuitBreakerOpen,
        EventKind::ComplianceSanctionCheckFailure,
        EventKind::UserLoggedIn,
        EventKind::SecurityEventDetected,
        EventKind::DataBreachSuspected,
        EventKind::UnauthorizedAccessAttempt,
        EventKind::DatabaseConnectionFailed,
        EventKind::TransactionRateLimitHit,
        EventKind::ApiKeyCompromised,
        EventKind::InsiderThreatDetected,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::Inf => "INF",
            EventKind::Dbg => "DBG",
            EventKind::Wrn => "WRN",
            EventKind::Err => "ERR",
            EventKind::Crt => "CRT",
            EventKind::ComplianceEvaluationStarted => "ComplianceEvaluationStarted",
            EventKind::ComplianceEvaluationCompleted => "ComplianceEvaluationCompleted",
            EventKind::AccountNumberComplianceViolation => "AccountNumberComplianceViolation",
            EventKind::ComplianceAdaptationInitiated => "ComplianceAdaptationInitiated",
            EventKind::ComplianceRuleAdapted => "ComplianceRuleAdapted",
            EventKind::PromptProcessed => "PromptProcessed",
            EventKind::ServiceDiscovery => "ServiceDiscovery",
            EventKind::MaskingSensitivityAdjusted => "MaskingSensitivityAdjusted",
            EventKind::AccountNumberComplianceChecked => "AccountNumberComplianceChecked",
            EventKind::AccountNumberMasked => "AccountNumberMasked",
            EventKind::ValidationAnomalyDetected => "ValidationAnomalyDetected",
            EventKind::CircuitBreakerWarning => "CircuitBreakerWarning",
            EventKind::CircuitBreakerOpen => "CircuitBreakerOpen",
            EventKind::ComplianceSanctionCheckFailure => "ComplianceSanctionCheckFailure",
            EventKind::UserLoggedIn => "UserLoggedIn",
            EventKind::SecurityEventDetected => "SecurityEventDetected",
            EventKind::DataBreachSuspected => "DataBreachSuspected",
            EventKind::UnauthorizedAccessAttempt => "UnauthorizedAccessAttempt",
            EventKind::DatabaseConnectionFailed => "DatabaseConnectionFailed",
            EventKind::TransactionRateLimitHit => "TransactionRateLimitHit",
            EventKind::ApiKeyCompromised => "APIKeyCompromised",
            EventKind::InsiderThreatDetected => "InsiderThreatDetected",
        }
    }

    /// Kinds that always escalate to CRT regardless of the severity draw.
    pub fn forces_critical(self) -> bool {
        matches!(self, EventKind::Crt | EventKind::DataBreachSuspected)
    }
}

/// Payment/identity reference scheme attached to an event. Descriptive
/// only — no validation is performed against any of these formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountScheme {
    Iban,
    Clabe,
    Swift,
    Aba,
    Bic,
    Account,
    Card,
    CryptoWallet,
    Upi,
    Pix,
    Fps,
    PaypalId,
    VenmoId,
    ZelleId,
    Chaps,
    Fedwire,
    Sepa,
    Rtp,
    Other,
    TaxId,
    NationalId,
}

impl AccountScheme {
    pub const ALL: [AccountScheme; 21] = [
        AccountScheme::Iban,
        AccountScheme::Clabe,
        AccountScheme::Swift,
        AccountScheme::Aba,
        AccountScheme::Bic,
        AccountScheme::Account,
        AccountScheme::Card,
        AccountScheme::CryptoWallet,
        AccountScheme::Upi,
        AccountScheme::Pix,
        AccountScheme::Fps,
        AccountScheme::PaypalId,
        AccountScheme::VenmoId,
        AccountScheme::ZelleId,
        AccountScheme::Chaps,
        AccountScheme::Fedwire,
        AccountScheme::Sepa,
        AccountScheme::Rtp,
        AccountScheme::Other,
        AccountScheme::TaxId,
        AccountScheme::NationalId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccountScheme::Iban => "IBAN",
            AccountScheme::Clabe => "CLABE",
            AccountScheme::Swift => "SWIFT",
            AccountScheme::Aba => "ABA",
            AccountScheme::Bic => "BIC",
            AccountScheme::Account => "ACCOUNT",
            AccountScheme::Card => "CARD",
            AccountScheme::CryptoWallet => "CRYPTO_WALLET",
            AccountScheme::Upi => "UPI",
            AccountScheme::Pix => "PIX",
            AccountScheme::Fps => "FPS",
            AccountScheme::PaypalId => "PAYPAL_ID",
            AccountScheme::VenmoId => "VENMO_ID",
            AccountScheme::ZelleId => "ZELLE_ID",
            AccountScheme::Chaps => "CHAPS",
            AccountScheme::Fedwire => "FEDWIRE",
            AccountScheme::Sepa => "SEPA",
            AccountScheme::Rtp => "RTP",
            AccountScheme::Other => "OTHER",
            AccountScheme::TaxId => "TAX_ID",
            AccountScheme::NationalId => "NATIONAL_ID",
        }
    }
}

/// One synthetic telemetry record.
///
/// `id` is an opaque token used only as a display/list key; `timestamp`
/// is the human-readable capture time, assigned at creation and never
/// mutated; `metadata` is an open mapping of auxiliary numeric fields
/// (currently only `"latency"`, simulated milliseconds).
#[derive(Clone, Debug)]
pub struct TelemetryEvent {
    pub id: String,
    pub timestamp: String,
    pub kind: EventKind,
    pub severity: Severity,
    pub company: String,
    pub account_scheme: AccountScheme,
    pub account_number: String,
    pub description: String,
    pub metadata: BTreeMap<String, f64>,
}

impl TelemetryEvent {
    /// Simulated latency in milliseconds, if present in the metadata map.
    pub fn latency_ms(&self) -> f64 {
        self.metadata.get("latency").copied().unwrap_or(0.0)
    }

    /// First four characters of the id, as shown in the account column.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(4)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Inf.label(), "INF");
        assert_eq!(Severity::Crt.label(), "CRT");
    }

    #[test]
    fn risk_lookup_matches_display_table() {
        assert_eq!(Severity::Crt.risk_score(), 100.0);
        assert_eq!(Severity::Err.risk_score(), 70.0);
        assert_eq!(Severity::Wrn.risk_score(), 40.0);
        assert_eq!(Severity::Dbg.risk_score(), 10.0);
        assert_eq!(Severity::Inf.risk_score(), 10.0);
    }

    #[test]
    fn kind_names_are_unique() {
        let mut names: Vec<&str> = EventKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EventKind::ALL.len());
    }

    #[test]
    fn only_crt_and_breach_force_critical() {
        for kind in EventKind::ALL {
            let expected =
                matches!(kind, EventKind::Crt | EventKind::DataBreachSuspected);
            assert_eq!(kind.forces_critical(), expected, "kind {:?}", kind);
        }
    }

    #[test]
    fn scheme_set_is_closed_at_21() {
        assert_eq!(AccountScheme::ALL.len(), 21);
        let mut names: Vec<&str> = AccountScheme::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn short_id_takes_first_four_chars() {
        let mut ev = sample_event();
        ev.id = "abcdef".into();
        assert_eq!(ev.short_id(), "abcd");
        ev.id = "ab".into();
        assert_eq!(ev.short_id(), "ab");
    }

    #[test]
    fn latency_defaults_to_zero_when_absent() {
        let mut ev = sample_event();
        ev.metadata.clear();
        assert_eq!(ev.latency_ms(), 0.0);
    }

    fn sample_event() -> TelemetryEvent {
        let mut metadata = BTreeMap::new();
        metadata.insert("latency".to_string(), 42.0);
        TelemetryEvent {
            id: "k3j2h1g0f9e8".into(),
            timestamp: "12:00:00".into(),
            kind: EventKind::UserLoggedIn,
            severity: Severity::Inf,
            company: "GemBankini".into(),
            account_scheme: AccountScheme::Iban,
            account_number: "****1234".into(),
            description: "Triggered by UserLoggedIn logic for secure routing.".into(),
            metadata,
        }
    }
}
