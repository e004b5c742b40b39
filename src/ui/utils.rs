use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Creates a centered rectangle within the given area, used for the
/// switcher menu overlay.
///
/// Percentages are clamped to 0-100; on very small terminals the
/// result is widened to stay usable.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    let min_width = 24u16;
    let min_height = 7u16;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let middle = vertical
        .get(1)
        .copied()
        .unwrap_or_else(|| vertical.first().copied().unwrap_or(r));

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(middle);

    let mut result = horizontal
        .get(1)
        .copied()
        .unwrap_or_else(|| horizontal.first().copied().unwrap_or(r));

    if result.width < min_width && r.width >= min_width {
        result.width = min_width.min(r.width);
        result.x = r.x + (r.width.saturating_sub(result.width)) / 2;
    }
    if result.height < min_height && r.height >= min_height {
        result.height = min_height.min(r.height);
        result.y = r.y + (r.height.saturating_sub(result.height)) / 2;
    }

    result
}
