use ratatui::layout::{Constraint, Layout, Rect};

/// Split the screen into header, page body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}

/// One-line input box centered horizontally near the top of `area`.
pub fn address_bar_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).clamp(20.min(area.width), 80);
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height).min(2),
        width,
        height,
    }
}
