//! Text buffer interface consumed by the input bar.

use crate::core::component::{Component, Focusable};
use crate::core::text::width::visible_width;

/// Input filter called with the text as it would read after the edit and the character being
/// added. Returning `false` drops the edit.
pub type AcceptFunc = Box<dyn FnMut(&str, char) -> bool + Send>;

/// Editable text buffer with a label.
///
/// The input bar owns exactly one editor and forwards every editing key to it; the editor
/// never sees navigation keys while the autocomplete popup is open.
pub trait TextEditor: Component + Focusable {
    /// Get the current text content.
    fn get_text(&self) -> String;

    /// Replace the text content, optionally moving the cursor to the end.
    fn set_text(&mut self, text: &str, cursor_at_end: bool);

    /// Cursor and selection end as `(row, col, to_row, to_col)` in display cells.
    fn get_cursor(&self) -> (usize, usize, usize, usize);

    fn label(&self) -> &str;

    fn set_label(&mut self, label: &str);

    /// Fixed label width; 0 means "measure the label".
    fn set_label_width(&mut self, _width: usize) {}

    /// Columns taken by the label when drawn.
    fn label_width(&self) -> usize {
        visible_width(self.label())
    }

    /// Install or remove the input filter.
    fn set_accept(&mut self, _accept: Option<AcceptFunc>) {}

    /// Keep at least `columns` cells visible to the right of the cursor when scrolling.
    fn set_min_cursor_padding(&mut self, _columns: usize) {}

    fn focus(&mut self) {
        self.set_focused(true);
    }

    fn blur(&mut self) {
        self.set_focused(false);
    }

    fn has_focus(&self) -> bool {
        self.is_focused()
    }
}
