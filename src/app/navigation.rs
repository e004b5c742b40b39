/// Generic cursor trait for list-like UI components
/// Shared by the root list and the switcher menu
pub trait Navigable {
    /// Returns the total number of items in the list
    fn item_count(&self) -> usize;

    /// Returns the current cursor position
    fn selected_index(&self) -> usize;

    /// Sets the cursor position
    fn set_selected_index(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.selected_index() + 1) % count;
            self.set_selected_index(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let prev = if self.selected_index() == 0 {
                count - 1
            } else {
                self.selected_index() - 1
            };
            self.set_selected_index(prev);
        }
    }
}
