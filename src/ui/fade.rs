//! Color blending for the cross-dissolve
//!
//! Terminal cells have no alpha channel, so the dissolve is rendered
//! by washing the visible panel's cells toward the other panel's
//! accent color in proportion to the fade progress.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

/// Blends every cell in `area` toward `tint` by `alpha` (0.0 leaves
/// the buffer untouched, 1.0 is a flat tint).
pub fn wash(buffer: &mut Buffer, area: Rect, tint: Color, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut(Position::new(x, y)) {
                cell.fg = blend(cell.fg, tint, alpha);
                cell.bg = blend(cell.bg, tint, alpha);
            }
        }
    }
}

/// Blends one color toward a tint. Colors without a known RGB value
/// switch over to the tint past the midpoint.
pub fn blend(color: Color, tint: Color, alpha: f32) -> Color {
    match (rgb_of(color), rgb_of(tint)) {
        (Some(from), Some(to)) => {
            let (fr, fg, fb) = from;
            let (tr, tg, tb) = to;
            Color::Rgb(
                lerp_channel(fr, tr, alpha),
                lerp_channel(fg, tg, alpha),
                lerp_channel(fb, tb, alpha),
            )
        }
        _ => {
            if alpha > 0.5 {
                tint
            } else {
                color
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, alpha: f32) -> u8 {
    let blended = f32::from(from) + (f32::from(to) - f32::from(from)) * alpha;
    blended.round().clamp(0.0, 255.0) as u8
}

fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((255, 255, 255)),
        Color::Gray => Some((169, 169, 169)),
        Color::DarkGray => Some((105, 105, 105)),
        Color::Reset
        | Color::Red
        | Color::Green
        | Color::Yellow
        | Color::Blue
        | Color::Magenta
        | Color::Cyan
        | Color::LightRed
        | Color::LightGreen
        | Color::LightYellow
        | Color::LightBlue
        | Color::LightMagenta
        | Color::LightCyan
        | Color::Indexed(_) => None,
    }
}
