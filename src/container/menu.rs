use super::registry::SelectionRegistry;

/// One selectable entry in the switcher menu. The label is presentation
/// text only; selection is keyed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub checked: bool,
}

/// Render model for the switcher menu: one option per panel, exactly
/// one checked. Rebuilt in full whenever the active index changes
/// (single-selection policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    pub title: String,
    pub options: Vec<MenuOption>,
}

impl MenuModel {
    /// Builds the menu from the registry's current state.
    pub fn rebuild(title: impl Into<String>, registry: &SelectionRegistry) -> Self {
        let active = registry.current_index();
        let options = registry
            .titles()
            .enumerate()
            .map(|(index, label)| MenuOption {
                label: label.to_string(),
                checked: index == active,
            })
            .collect();
        Self {
            title: title.into(),
            options,
        }
    }

    #[must_use]
    pub fn checked_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.checked)
    }
}
