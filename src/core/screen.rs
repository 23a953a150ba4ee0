//! Character-grid drawing surface contract.

use crate::core::geometry::{Position, Rect};

/// A rectangular grid of cells that widgets draw into.
///
/// Implementations clip every write to their own bounds, so callers may pass rectangles that
/// extend past the edge.
pub trait Screen {
    /// Returns `(width, height)` in cells.
    fn size(&self) -> (usize, usize);

    /// Writes `text` starting at `(x, y)`, consuming at most `max_width` columns.
    ///
    /// Escape sequences in `text` set the style of the cells that follow them. Returns the
    /// number of columns written.
    fn put_str(&mut self, x: usize, y: usize, text: &str, max_width: usize) -> usize;

    /// Fills `area` with `ch` using the default style.
    fn fill(&mut self, area: Rect, ch: char);

    /// Places (or hides, with `None`) the terminal cursor.
    fn set_cursor(&mut self, position: Option<Position>);

    /// The full screen as a rectangle.
    fn bounds(&self) -> Rect {
        let (width, height) = self.size();
        Rect::new(0, 0, width, height)
    }
}
