mod components;
mod fade;
mod menu;
mod root;
mod surface;
mod utils;

use std::time::Instant;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    match app.mode {
        AppMode::Root => root::render_root(f, app),
        AppMode::Container => surface::render_container(f, app, now),
        AppMode::SwitcherMenu => {
            // Container stays visible behind the switcher overlay
            surface::render_container(f, app, now);
            menu::render_switcher_menu(f, app);
        }
    }
}
