//! Live event stream table, newest event first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use gemitrace_stream::event::{Severity, TelemetryEvent};

/// Display style for a severity badge. CRT is the only bold one.
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Crt => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Severity::Err => Style::default().fg(Color::Red),
        Severity::Wrn => Style::default().fg(Color::Yellow),
        Severity::Dbg => Style::default().fg(Color::DarkGray),
        Severity::Inf => Style::default().fg(Color::Blue),
    }
}

/// Render the event table. `events` is expected newest-first, exactly as
/// the buffer stores it.
pub fn render_event_stream(f: &mut Frame, area: Rect, events: &[TelemetryEvent]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("LIVE EVENT STREAM")
        .title_bottom(Line::from(format!(" showing last {} events ", events.len())));

    let header = Row::new(vec![
        Cell::from("Timestamp"),
        Cell::from("Event Type"),
        Cell::from("Company"),
        Cell::from("Severity"),
        Cell::from("Account Reference"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = events
        .iter()
        .map(|event| {
            Row::new(vec![
                Cell::from(Span::styled(
                    event.timestamp.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from(event.kind.name()),
                Cell::from(event.company.clone()),
                Cell::from(Span::styled(
                    event.severity.label(),
                    severity_style(event.severity),
                )),
                Cell::from(Line::from(vec![
                    Span::styled(
                        format!("ID: {}", event.short_id()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(" "),
                    Span::raw(event.account_number.clone()),
                ])),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(28),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    f.render_widget(table, area);
}
