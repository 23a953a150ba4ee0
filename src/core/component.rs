//! Component and Focusable traits.

use crate::core::geometry::Rect;
use crate::core::input_event::InputEvent;
use crate::core::screen::Screen;

/// Drawable, input-handling component.
pub trait Component {
    /// Draw into `area` of `screen`.
    ///
    /// Drawing reads state only; anything that must change in response to layout is computed
    /// here from the current state rather than cached.
    fn draw(&self, screen: &mut dyn Screen, area: Rect);

    /// Handle input events.
    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Optional focusable behavior.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focusable behavior for components that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
