//! AI compliance audit sidebar.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use gemitrace_audit::AuditStatus;

const BLURB: &str = "Run an instant AI-powered heuristic analysis on the current telemetry \
                     stream to detect complex risk patterns and compliance drifts.";

/// Render the audit sidebar for the current audit lifecycle state.
pub fn render_audit_panel(f: &mut Frame, area: Rect, status: &AuditStatus) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("AI COMPLIANCE AUDIT");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    match status {
        AuditStatus::Idle => {
            lines.extend(wrap_blurb());
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[a] RUN AI AUDIT",
                Style::default()
                    .fg(Color::Indexed(99))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Waiting for Audit Initiation",
                Style::default().fg(Color::DarkGray),
            )));
        }
        AuditStatus::Requesting => {
            lines.extend(wrap_blurb());
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "ANALYZING...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        AuditStatus::Complete(text) => {
            // Result is freeform service text, shown verbatim.
            for raw in text.lines() {
                lines.push(Line::from(raw.to_string()));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[d] DISMISS ANALYSIS",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        inner,
    );
}

fn wrap_blurb() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        BLURB,
        Style::default().fg(Color::Gray),
    ))]
}
