use serde::Serialize;

use gemitrace_stream::event::TelemetryEvent;

/// Number of newest events included in an audit snapshot.
pub const AUDIT_WINDOW: usize = 10;

/// Reduced event view sent to the analysis service. Account numbers and raw
/// metadata are deliberately excluded.
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub company: String,
    pub desc: String,
}

impl EventSummary {
    pub fn from_event(event: &TelemetryEvent) -> Self {
        Self {
            time: event.timestamp.clone(),
            kind: event.kind.name().to_string(),
            severity: event.severity.label().to_string(),
            company: event.company.clone(),
            desc: event.description.clone(),
        }
    }
}

/// Summarize events for the audit request.
pub fn summarize(events: &[TelemetryEvent]) -> Vec<EventSummary> {
    events.iter().map(EventSummary::from_event).collect()
}

/// Build the full instruction prompt around the serialized event summaries.
pub fn build_prompt(events: &[TelemetryEvent]) -> String {
    let summaries = summarize(events);
    let json = serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are a Senior Compliance and Systems Architect for a global financial institution.\n\
         Analyze the following stream of system telemetry events and provide a concise expert summary.\n\
         \n\
         EVENTS:\n\
         {json}\n\
         \n\
         TASKS:\n\
         1. Identify any critical security or compliance patterns (look for account masking issues or unauthorized access).\n\
         2. Suggest immediate remediation steps for the most severe issues found.\n\
         3. Provide a \"System Health Score\" (0-100).\n\
         4. Format the response in Markdown with clear headings."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemitrace_stream::buffer::EventBuffer;
    use gemitrace_stream::generator::EventGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_buffer() -> EventBuffer {
        let gen = EventGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        EventBuffer::seeded(&gen, &mut rng)
    }

    #[test]
    fn summary_carries_display_fields_only() {
        let buffer = seeded_buffer();
        let events = buffer.snapshot_newest(AUDIT_WINDOW);
        let summaries = summarize(&events);
        assert_eq!(summaries.len(), AUDIT_WINDOW);

        let json = serde_json::to_string(&summaries).unwrap();
        for event in &events {
            // Masked account numbers must never reach the wire.
            assert!(!json.contains(&event.account_number));
        }
        assert!(!json.contains("latency"));
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"desc\""));
    }

    #[test]
    fn prompt_embeds_events_and_instructions() {
        let buffer = seeded_buffer();
        let events = buffer.snapshot_newest(3);
        let prompt = build_prompt(&events);

        assert!(prompt.starts_with("You are a Senior Compliance and Systems Architect"));
        assert!(prompt.contains("EVENTS:"));
        assert!(prompt.contains("System Health Score"));
        for event in &events {
            assert!(prompt.contains(&event.company));
        }
    }

    #[test]
    fn prompt_for_empty_snapshot_still_well_formed() {
        let prompt = build_prompt(&[]);
        assert!(prompt.contains("[]"));
        assert!(prompt.contains("TASKS:"));
    }
}
