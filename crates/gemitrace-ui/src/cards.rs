//! Stats cards row: the four headline aggregates with status badges.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use gemitrace_stream::stats::DashboardStats;

/// Format a count with thousands separators, e.g. `12050` -> `"12,050"`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, badge: &str, badge_color: Color) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(badge.to_string(), Style::default().fg(badge_color)),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

/// Render the four stats cards across the given area.
pub fn render_stats_cards(f: &mut Frame, area: Rect, stats: &DashboardStats) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cols[0],
        "Total Events",
        format_count(stats.total_events),
        "60m span",
        Color::Blue,
    );

    let (compliance_badge, compliance_color) = if stats.compliance_violations > 0 {
        ("NEEDS REVIEW", Color::Red)
    } else {
        ("SECURE", Color::Green)
    };
    render_card(
        f,
        cols[1],
        "Compliance Violations",
        stats.compliance_violations.to_string(),
        compliance_badge,
        compliance_color,
    );

    render_card(
        f,
        cols[2],
        "Critical Errors",
        stats.critical_errors.to_string(),
        "ACTIVE",
        Color::Red,
    );

    render_card(
        f,
        cols[3],
        "System Uptime",
        stats.system_uptime.to_string(),
        "EXCELLENT",
        Color::Green,
    );
}
