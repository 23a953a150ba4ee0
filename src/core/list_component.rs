//! Selectable list interface used to paint and navigate the autocomplete popup.

use crate::core::component::Component;
use crate::core::geometry::{Position, Rect};

/// Called with `(index, primary, secondary)` of the affected item.
pub type ListItemCallback = Box<dyn FnMut(usize, &str, &str) + Send>;

/// Called when a specific item is activated.
pub type ItemSelectCallback = Box<dyn FnMut() + Send>;

/// A vertical list of `(primary, secondary)` items with a current item.
pub trait SelectableList: Component {
    /// Remove every item and reset the current item.
    fn clear(&mut self);

    fn add_item(
        &mut self,
        primary: &str,
        secondary: &str,
        shortcut: Option<char>,
        on_select: Option<ItemSelectCallback>,
    );

    fn item_count(&self) -> usize;

    fn item_text(&self, index: usize) -> Option<(&str, &str)>;

    fn current_item(&self) -> usize;

    /// Move the current item without firing callbacks.
    fn set_current_item(&mut self, index: usize);

    fn set_rect(&mut self, rect: Rect);

    fn rect(&self) -> Rect;

    /// Fired whenever navigation moves the current item.
    fn set_on_selection_change(&mut self, handler: Option<ListItemCallback>);

    /// Fired when an item is confirmed (key, shortcut or click).
    fn set_on_item_activated(&mut self, handler: Option<ListItemCallback>);

    /// Activate the item at `index`: fire its own callback, then the activated handler.
    fn activate(&mut self, index: usize);

    /// Index of the item drawn at `position` within the current rect.
    fn item_at(&self, position: Position) -> Option<usize>;

    /// Narrowest width the list accepts.
    fn min_width(&self) -> usize {
        0
    }
}
