//! Header and bottom status bar.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INSTITUTION: &str = "Citibank demo business Inc";
const BUFFER_METER_DOTS: usize = 8;

/// Render the top bar: product name, institution label, live indicator.
pub fn render_header(f: &mut Frame, area: Rect, status_line: &str) {
    let line = Line::from(vec![
        Span::styled(
            "GemiTrace Engine",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{INSTITUTION} • Internal Monitoring"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" | "),
        Span::styled(status_line.to_string(), Style::default().fg(Color::Green)),
    ]);
    let header = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

/// Filled/empty dot meter for buffer fill, one dot per six buffered events.
pub fn buffer_meter(len: usize) -> String {
    let filled = len.div_ceil(6).min(BUFFER_METER_DOTS);
    let mut meter = String::new();
    for i in 0..BUFFER_METER_DOTS {
        meter.push(if i < filled { '●' } else { '○' });
    }
    meter
}

/// Render the bottom bar: buffer meter, static data-flow rate, and the
/// countdown to the next feed event.
pub fn render_footer(f: &mut Frame, area: Rect, buffered: usize, secs_to_next: u64) {
    let line = Line::from(vec![
        Span::styled("Buffer Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(buffer_meter(buffered), Style::default().fg(Color::Green)),
        Span::raw("  |  "),
        Span::styled("Data Flow: ", Style::default().fg(Color::DarkGray)),
        Span::styled("4.2 KB/s", Style::default().fg(Color::Indexed(99))),
        Span::raw("  |  "),
        Span::styled(
            format!("Next event: {secs_to_next}s"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  |  "),
        Span::styled("` console  q quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(100, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().to_string())
            .collect()
    }

    #[test]
    fn header_carries_branding() {
        let text = render_to_text(|f| render_header(f, f.area(), "LIVE FEED"));
        assert!(text.contains("GemiTrace Engine"));
        assert!(text.contains("Citibank demo business Inc"));
        assert!(text.contains("LIVE FEED"));
    }

    #[test]
    fn buffer_meter_fills_one_dot_per_six_events() {
        assert_eq!(buffer_meter(0), "○○○○○○○○");
        assert_eq!(buffer_meter(6), "●○○○○○○○");
        assert_eq!(buffer_meter(15), "●●●○○○○○");
        assert_eq!(buffer_meter(50), "●●●●●●●●");
        // Never overflows the eight dots.
        assert_eq!(buffer_meter(500).chars().count(), 8);
    }

    #[test]
    fn footer_shows_meter_and_flow_rate() {
        let text = render_to_text(|f| render_footer(f, f.area(), 15, 3));
        assert!(text.contains("Buffer Status:"));
        assert!(text.contains("●●●○○○○○"));
        assert!(text.contains("4.2 KB/s"));
        assert!(text.contains("Next event: 3s"));
    }
}
