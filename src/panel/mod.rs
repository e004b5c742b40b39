//! Switchable panel capability
//!
//! A panel is an opaque presentable unit: it has a display title, a
//! dominant accent color (used by the cross-fade), and knows how to
//! draw itself into a frame region. Concrete panels are plain data
//! (title, color, rows) rather than a type per screen.

mod colors;
mod search;

pub use colors::{SYSTEM_COLORS, color_panels};
pub use search::search_panels;

use ratatui::{Frame, layout::Rect, style::Color};

/// A presentable unit the container can attach and switch between.
pub trait Panel {
    /// Display title, also shown as the menu option label.
    fn title(&self) -> &str;

    /// Dominant color of the panel, used to tint the cross-fade.
    fn accent(&self) -> Color;

    /// Draws the panel into `area`.
    fn render(&self, frame: &mut Frame, area: Rect);
}
