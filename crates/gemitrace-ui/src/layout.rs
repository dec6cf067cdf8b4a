use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct DashboardRects {
    pub header: Rect,
    pub cards: Rect,
    pub chart: Rect,
    pub stream: Rect,
    pub sidebar: Rect,
    pub footer: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardRects {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + rule
            Constraint::Length(4), // stats cards
            Constraint::Min(1),    // chart, stream, sidebar
            Constraint::Length(1), // bottom bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[2]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(1)])
        .split(body[0]);

    DashboardRects {
        header: rows[0],
        cards: rows[1],
        chart: main[0],
        stream: main[1],
        sidebar: body[1],
        footer: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_tile_the_area() {
        let area = Rect::new(0, 0, 120, 40);
        let rects = dashboard_layout(area);

        assert_eq!(rects.header.height, 2);
        assert_eq!(rects.cards.height, 4);
        assert_eq!(rects.footer.height, 1);
        assert_eq!(
            rects.header.height + rects.cards.height + rects.chart.height + rects.stream.height
                + rects.footer.height,
            area.height
        );
        assert_eq!(rects.chart.width + rects.sidebar.width, area.width);
        assert_eq!(rects.sidebar.height, rects.chart.height + rects.stream.height);
    }

    #[test]
    fn no_panic_on_tiny_terminal() {
        let rects = dashboard_layout(Rect::new(0, 0, 10, 5));
        assert!(rects.footer.height <= 1);
    }
}
