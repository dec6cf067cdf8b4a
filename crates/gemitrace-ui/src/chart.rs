//! Latency and risk trend chart over the newest chart-window events.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use gemitrace_stream::chart::{TrendPoint, CHART_WINDOW};

/// Render the trend chart. Points are chronological; the x axis is the
/// sample index inside the window, the y axis covers both series (latency
/// 0..200 ms, risk 0..100).
pub fn render_trend_chart(f: &mut Frame, area: Rect, trend: &[TrendPoint]) {
    let latency: Vec<(f64, f64)> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.latency))
        .collect();
    let risk: Vec<(f64, f64)> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.risk))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Latency (ms)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&latency),
        Dataset::default()
            .name("Risk Score")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&risk),
    ];

    let x_max = (CHART_WINDOW.saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(datasets)
        // Keep the legend visible in the fairly short chart band.
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Event Latency & Risk Trends"),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels(trend)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 200.0])
                .labels(["0", "100", "200"].map(Span::raw).to_vec()),
        );

    f.render_widget(chart, area);
}

/// First and last capture timestamps of the window, or blanks when empty.
fn x_labels(trend: &[TrendPoint]) -> Vec<Span<'static>> {
    match (trend.first(), trend.last()) {
        (Some(first), Some(last)) => vec![
            Span::raw(first.timestamp.clone()),
            Span::raw(last.timestamp.clone()),
        ],
        _ => vec![Span::raw(""), Span::raw("")],
    }
}
