use thiserror::Error;

use crate::panel::Panel;

/// Failures of the container contract. All are misconfiguration at the
/// boundary; none occur once a container is constructed and presented
/// with indices taken from its own menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("panel index {index} is out of range (container holds {len} panels)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a container needs at least one panel")]
    Empty,

    #[error("no panel is attached; present() has not run")]
    NotPresented,
}

/// Ordered set of switchable panels plus the index of the active one.
///
/// The panel list is fixed at construction. `active_index` is pure
/// bookkeeping; the coordinator is the only mutator and keeps it
/// pointing at the attached panel.
pub struct SelectionRegistry {
    panels: Vec<Box<dyn Panel>>,
    active_index: usize,
}

impl SelectionRegistry {
    /// Creates a registry over `panels` with `initial_index` active.
    /// Fails on an empty panel list or an out-of-range index rather
    /// than clamping.
    pub fn new(
        panels: Vec<Box<dyn Panel>>,
        initial_index: usize,
    ) -> Result<Self, ContainerError> {
        if panels.is_empty() {
            return Err(ContainerError::Empty);
        }
        if initial_index >= panels.len() {
            return Err(ContainerError::IndexOutOfRange {
                index: initial_index,
                len: panels.len(),
            });
        }
        Ok(Self {
            panels,
            active_index: initial_index,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.active_index
    }

    /// Looks up a panel by position.
    pub fn panel_at(&self, index: usize) -> Result<&dyn Panel, ContainerError> {
        self.panels
            .get(index)
            .map(|panel| &**panel)
            .ok_or(ContainerError::IndexOutOfRange {
                index,
                len: self.panels.len(),
            })
    }

    /// Updates the active index. Bookkeeping only; attachment is the
    /// coordinator's job.
    pub fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.panels.len());
        self.active_index = index;
    }

    /// Panel titles in menu order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|panel| panel.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Frame, layout::Rect, style::Color};

    struct StubPanel {
        name: &'static str,
    }

    impl Panel for StubPanel {
        fn title(&self) -> &str {
            self.name
        }

        fn accent(&self) -> Color {
            Color::Reset
        }

        fn render(&self, _frame: &mut Frame, _area: Rect) {}
    }

    fn stub_panels(names: &[&'static str]) -> Vec<Box<dyn Panel>> {
        names
            .iter()
            .map(|name| Box::new(StubPanel { name: *name }) as Box<dyn Panel>)
            .collect()
    }

    #[test]
    fn test_new_rejects_empty_panel_list() {
        let result = SelectionRegistry::new(Vec::new(), 0);
        assert_eq!(result.err(), Some(ContainerError::Empty));
    }

    #[test]
    fn test_new_rejects_out_of_range_initial_index() {
        let result = SelectionRegistry::new(stub_panels(&["Red", "Orange"]), 2);
        assert_eq!(
            result.err(),
            Some(ContainerError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_new_accepts_last_valid_index() {
        let registry = SelectionRegistry::new(stub_panels(&["Red", "Orange"]), 1).unwrap();
        assert_eq!(registry.current_index(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_panel_at_out_of_range() {
        let registry = SelectionRegistry::new(stub_panels(&["Red"]), 0).unwrap();
        assert!(registry.panel_at(0).is_ok());
        assert_eq!(
            registry.panel_at(1).err(),
            Some(ContainerError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_set_active_updates_current_index() {
        let mut registry =
            SelectionRegistry::new(stub_panels(&["Red", "Orange", "Yellow"]), 0).unwrap();
        registry.set_active(2);
        assert_eq!(registry.current_index(), 2);
    }

    #[test]
    fn test_titles_preserve_order() {
        let registry = SelectionRegistry::new(stub_panels(&["Red", "Orange"]), 0).unwrap();
        let titles: Vec<&str> = registry.titles().collect();
        assert_eq!(titles, vec!["Red", "Orange"]);
    }
}
