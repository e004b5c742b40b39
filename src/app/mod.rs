mod navigation;

pub use navigation::Navigable;

use std::time::Instant;

use color_eyre::Result;

use crate::config::Config;
use crate::container::{Container, LifecycleObserver, NullObserver, TracingObserver};
use crate::panel::{self, Panel, SYSTEM_COLORS};

/// Which of the two demos is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Colors,
    Search,
}

impl Demo {
    #[must_use]
    pub fn menu_title(&self) -> &'static str {
        match self {
            Demo::Colors => "Colors",
            Demo::Search => "Search Domains",
        }
    }

    fn panels(&self) -> Vec<Box<dyn Panel>> {
        match self {
            Demo::Colors => panel::color_panels(),
            Demo::Search => panel::search_panels(),
        }
    }
}

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The demo's entry screen.
    Root,
    /// The container with its active panel.
    Container,
    /// The switcher menu, overlaid on the container.
    SwitcherMenu,
}

/// Main application state
pub struct App {
    pub demo: Demo,
    pub mode: AppMode,
    pub should_quit: bool,
    /// Cursor in the root list (colors demo).
    pub root_selected: usize,
    /// Cursor in the switcher menu overlay.
    pub menu_cursor: usize,
    pub container: Option<Container>,
    /// Whether lifecycle events go to the tracing log file.
    pub lifecycle_logging: bool,
    config: Config,
}

impl App {
    /// Creates a new application instance for the given demo
    pub fn new(demo: Demo, config: Config) -> Self {
        Self {
            demo,
            mode: AppMode::Root,
            should_quit: false,
            root_selected: 0,
            menu_cursor: 0,
            container: None,
            lifecycle_logging: false,
            config,
        }
    }

    /// Number of rows on the demo's root screen.
    #[must_use]
    pub fn root_item_count(&self) -> usize {
        match self.demo {
            Demo::Colors => SYSTEM_COLORS.len(),
            Demo::Search => 1,
        }
    }

    /// Opens the container seeded at the root selection (colors) or the
    /// configured search domain (search).
    pub fn open_selected_root_item(&mut self) -> Result<()> {
        let initial_index = match self.demo {
            Demo::Colors => self.root_selected,
            Demo::Search => self.config.search.initial_index,
        };
        self.open_container(initial_index)
    }

    /// Builds the demo's container, presents its seed panel, and enters
    /// container mode.
    pub fn open_container(&mut self, initial_index: usize) -> Result<()> {
        let observer: Box<dyn LifecycleObserver> = if self.lifecycle_logging {
            Box::new(TracingObserver)
        } else {
            Box::new(NullObserver)
        };
        let mut container = Container::new(
            self.demo.menu_title(),
            self.demo.panels(),
            initial_index,
            self.config.transition_duration(),
            observer,
        )?;
        container.present();
        self.container = Some(container);
        self.mode = AppMode::Container;
        Ok(())
    }

    /// Drops the container and returns to the root screen.
    pub fn close_container(&mut self) {
        self.container = None;
        self.mode = AppMode::Root;
    }

    /// Opens the switcher menu with the cursor on the checked option.
    pub fn open_switcher_menu(&mut self) {
        if let Some(container) = &self.container {
            self.menu_cursor = container
                .menu()
                .checked_index()
                .unwrap_or_else(|| container.active_index());
            self.mode = AppMode::SwitcherMenu;
        }
    }

    pub fn close_switcher_menu(&mut self) {
        self.mode = AppMode::Container;
    }

    /// Confirms the menu cursor as the new selection and closes the
    /// menu.
    pub fn confirm_menu_selection(&mut self, now: Instant) -> Result<()> {
        if let Some(container) = &mut self.container {
            container.select(self.menu_cursor, now)?;
        }
        self.mode = AppMode::Container;
        Ok(())
    }

    /// Per-frame housekeeping: advances an in-flight cross-fade.
    pub fn tick(&mut self, now: Instant) {
        if let Some(container) = &mut self.container {
            container.tick(now);
        }
    }
}

/// Cursor over the demo's root list.
pub struct RootNavigable<'a> {
    app: &'a mut App,
}

impl<'a> RootNavigable<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }
}

impl Navigable for RootNavigable<'_> {
    fn item_count(&self) -> usize {
        self.app.root_item_count()
    }

    fn selected_index(&self) -> usize {
        self.app.root_selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.app.root_selected = index;
    }
}

/// Cursor over the switcher menu options.
pub struct MenuNavigable<'a> {
    app: &'a mut App,
}

impl<'a> MenuNavigable<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }
}

impl Navigable for MenuNavigable<'_> {
    fn item_count(&self) -> usize {
        self.app
            .container
            .as_ref()
            .map_or(0, |container| container.len())
    }

    fn selected_index(&self) -> usize {
        self.app.menu_cursor
    }

    fn set_selected_index(&mut self, index: usize) {
        self.app.menu_cursor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn colors_app() -> App {
        App::new(Demo::Colors, Config::default())
    }

    #[test]
    fn test_root_list_matches_demo() {
        let colors = colors_app();
        assert_eq!(colors.root_item_count(), 7);
        let search = App::new(Demo::Search, Config::default());
        assert_eq!(search.root_item_count(), 1);
    }

    #[test]
    fn test_open_from_root_seeds_selected_row() {
        let mut app = colors_app();
        app.root_selected = 2;
        app.open_selected_root_item().unwrap();
        assert_eq!(app.mode, AppMode::Container);
        let container = app.container.as_ref().unwrap();
        assert_eq!(container.active_index(), 2);
        assert_eq!(container.title(), Some("Yellow"));
        assert_eq!(container.menu().title, "Colors");
    }

    #[test]
    fn test_search_demo_opens_configured_domain() {
        let mut app = App::new(Demo::Search, Config::default());
        app.open_selected_root_item().unwrap();
        let container = app.container.as_ref().unwrap();
        assert_eq!(container.active_index(), 3);
        assert_eq!(container.title(), Some("Search News"));
        assert_eq!(container.menu().title, "Search Domains");
        assert_eq!(container.menu().checked_index(), Some(3));
    }

    #[test]
    fn test_menu_cursor_opens_on_checked_option() {
        let mut app = colors_app();
        app.root_selected = 4;
        app.open_selected_root_item().unwrap();
        app.open_switcher_menu();
        assert_eq!(app.mode, AppMode::SwitcherMenu);
        assert_eq!(app.menu_cursor, 4);
    }

    #[test]
    fn test_confirm_menu_selection_switches_panel() {
        let mut app = colors_app();
        app.open_selected_root_item().unwrap();
        app.open_switcher_menu();
        app.menu_cursor = 6;

        let now = Instant::now();
        app.confirm_menu_selection(now).unwrap();
        assert_eq!(app.mode, AppMode::Container);

        app.tick(now + Duration::from_millis(250));
        let container = app.container.as_ref().unwrap();
        assert_eq!(container.active_index(), 6);
        assert_eq!(container.title(), Some("Purple"));
    }

    #[test]
    fn test_close_container_returns_to_root() {
        let mut app = colors_app();
        app.open_selected_root_item().unwrap();
        app.close_container();
        assert_eq!(app.mode, AppMode::Root);
        assert!(app.container.is_none());
    }

    #[test]
    fn test_menu_navigation_wraps_over_panels() {
        let mut app = colors_app();
        app.open_selected_root_item().unwrap();
        app.open_switcher_menu();
        app.menu_cursor = 6;
        MenuNavigable::new(&mut app).next_item();
        assert_eq!(app.menu_cursor, 0);
        MenuNavigable::new(&mut app).previous_item();
        assert_eq!(app.menu_cursor, 6);
    }
}
