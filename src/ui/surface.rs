use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::App;
use crate::container::Surface;
use crate::panel::Panel;
use crate::ui::{components, fade};

pub fn render_container(f: &mut Frame, app: &App, now: Instant) {
    let Some(container) = &app.container else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Panel surface
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_view_header(f, *header, app.demo.menu_title(), container.title());
        render_surface(f, *body, container.surface(now));

        let hints = if container.is_transitioning() {
            "m menu · esc back · fading…"
        } else {
            "m menu · esc back · ctrl+c quit"
        };
        components::render_footer_hints(f, *footer, hints);
    }
}

/// Draws the attached panel, or both panels blended while a
/// cross-fade is in flight. The incoming panel takes over the cells at
/// the dissolve midpoint; the wash keeps the colors moving smoothly
/// across the whole fade.
fn render_surface(f: &mut Frame, area: Rect, surface: Option<Surface<'_>>) {
    match surface {
        None => {}
        Some(Surface::Settled(panel)) => panel.render(f, area),
        Some(Surface::Fading { from, to, progress }) => {
            if progress < 0.5 {
                from.render(f, area);
                fade::wash(f.buffer_mut(), area, to.accent(), progress);
            } else {
                to.render(f, area);
                fade::wash(f.buffer_mut(), area, from.accent(), 1.0 - progress);
            }
        }
    }
}
