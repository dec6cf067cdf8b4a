use std::collections::BTreeMap;

use chrono::Local;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::event::{AccountScheme, EventKind, Severity, TelemetryEvent};

/// Severity draw pool, weighted 3:1:1:1:1 toward INF.
const SEVERITY_POOL: [Severity; 7] = [
    Severity::Inf,
    Severity::Inf,
    Severity::Inf,
    Severity::Dbg,
    Severity::Wrn,
    Severity::Err,
    Severity::Crt,
];

const ID_LEN: usize = 12;

// Building blocks for the fixed 50-entry synthetic company list.
const COMPANY_PREFIXES: [&str; 20] = [
    "Gem", "ChA", "Pip", "Git", "Hug", "Pla", "Mod", "Goo", "OnD", "Azu", "Sup", "Ver", "Sal",
    "Ora", "Mar", "Cit", "Sho", "Woo", "GoD", "Cpa",
];
const COMPANY_SUFFIXES: [&str; 18] = [
    "ini", "Gpt", "Drm", "Hub", "Fac", "aid", "Trs", "Dri", "Drv", "Clu", "Bas", "Cel", "Frc",
    "cle", "qta", "Ban", "ify", "Com",
];
const COMPANY_WORDS: [&str; 14] = [
    "Bank", "Trade", "Pay", "Credit", "Capital", "Digital", "Cloud", "Data", "Smart", "Global",
    "Fin", "Money", "Wallet", "Ledger",
];

const COMPANY_COUNT: usize = 50;

/// Build the stable synthetic company list (prefix + word + suffix, with
/// fixed index strides so the list stays reproducible).
pub fn company_list() -> Vec<String> {
    (0..COMPANY_COUNT)
        .map(|i| {
            let prefix = COMPANY_PREFIXES[i % COMPANY_PREFIXES.len()];
            let word = COMPANY_WORDS[(i * 7) % COMPANY_WORDS.len()];
            let suffix = COMPANY_SUFFIXES[(i * 3) % COMPANY_SUFFIXES.len()];
            format!("{prefix}{word}{suffix}")
        })
        .collect()
}

/// Fabricates one telemetry event per call.
///
/// Total over its random inputs — there is no failure mode. The RNG is
/// passed in so tests can drive the generator with a seeded [`rand::rngs::StdRng`].
pub struct EventGenerator {
    companies: Vec<String>,
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventGenerator {
    pub fn new() -> Self {
        Self {
            companies: company_list(),
        }
    }

    /// Produce one event. Kind is drawn uniformly over the closed set;
    /// CRT and DataBreachSuspected kinds force CRT severity, everything
    /// else draws from the INF-weighted pool.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> TelemetryEvent {
        let kind = *EventKind::ALL.choose(rng).unwrap_or(&EventKind::Inf);
        let severity = if kind.forces_critical() {
            Severity::Crt
        } else {
            *SEVERITY_POOL.choose(rng).unwrap_or(&Severity::Inf)
        };
        let company = self
            .companies
            .choose(rng)
            .cloned()
            .unwrap_or_default();
        let account_scheme = *AccountScheme::ALL.choose(rng).unwrap_or(&AccountScheme::Other);

        let mut metadata = BTreeMap::new();
        metadata.insert("latency".to_string(), rng.gen_range(0..200) as f64);

        TelemetryEvent {
            id: random_id(rng),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            kind,
            severity,
            company,
            account_scheme,
            account_number: format!("****{}", rng.gen_range(1000..10000)),
            description: format!("Triggered by {} logic for secure routing.", kind.name()),
            metadata,
        }
    }
}

fn random_id<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x6e_71)
    }

    #[test]
    fn company_list_is_fixed_at_fifty() {
        let list = company_list();
        assert_eq!(list.len(), 50);
        // Deterministic: first entry is prefix[0] + word[0] + suffix[0].
        assert_eq!(list[0], "GemBankini");
        assert_eq!(company_list(), list);
    }

    #[test]
    fn generated_fields_stay_in_closed_sets() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        for _ in 0..500 {
            let ev = gen.generate(&mut rng);
            assert!(Severity::ALL.contains(&ev.severity));
            assert!(EventKind::ALL.contains(&ev.kind));
            assert!(AccountScheme::ALL.contains(&ev.account_scheme));
        }
    }

    #[test]
    fn forced_kinds_always_escalate_to_crt() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        let mut seen_forced = 0;
        for _ in 0..2000 {
            let ev = gen.generate(&mut rng);
            if ev.kind.forces_critical() {
                seen_forced += 1;
                assert_eq!(ev.severity, Severity::Crt, "kind {:?}", ev.kind);
            }
        }
        assert!(seen_forced > 0, "seed never drew a forcing kind");
    }

    #[test]
    fn account_number_is_masked_prefix_plus_four_digits() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        for _ in 0..200 {
            let ev = gen.generate(&mut rng);
            assert_eq!(ev.account_number.len(), 8);
            assert!(ev.account_number.starts_with("****"));
            let suffix: u32 = ev.account_number[4..].parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn latency_stays_under_200ms() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        for _ in 0..200 {
            let ev = gen.generate(&mut rng);
            let latency = ev.latency_ms();
            assert!((0.0..200.0).contains(&latency), "latency {latency}");
        }
    }

    #[test]
    fn ids_are_opaque_and_distinct() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        let mut ids: Vec<String> = (0..100).map(|_| gen.generate(&mut rng).id).collect();
        assert!(ids.iter().all(|id| id.len() == ID_LEN));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn description_names_the_kind() {
        let gen = EventGenerator::new();
        let mut rng = seeded();
        let ev = gen.generate(&mut rng);
        assert!(ev.description.contains(ev.kind.name()));
        assert!(ev.description.ends_with("logic for secure routing."));
    }
}
