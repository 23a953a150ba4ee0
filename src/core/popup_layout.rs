//! Autocomplete popup geometry.
//!
//! The popup is placed just below the cursor row, shifted right past the label. When it does
//! not fit below and there is more room above, it flips above the cursor. Whatever still does
//! not fit is cut off so the popup never leaves the screen.

use crate::core::autocomplete::Candidate;
use crate::core::geometry::{Position, Rect};
use crate::core::text::width::visible_width;

/// Columns between the end of the label and the popup's left edge.
pub const DEFAULT_HORIZONTAL_OFFSET: usize = 5;

/// Border/padding columns (and rows) added around the candidate text.
pub const POPUP_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayoutOptions {
    pub horizontal_offset: usize,
    pub min_width: usize,
    /// Cap on the popup height including its border; the list scrolls past it.
    pub max_height: Option<usize>,
}

impl Default for PopupLayoutOptions {
    fn default() -> Self {
        Self {
            horizontal_offset: DEFAULT_HORIZONTAL_OFFSET,
            min_width: 0,
            max_height: None,
        }
    }
}

/// Computes the popup rectangle, measuring candidates with [`visible_width`].
///
/// Returns an empty rectangle when there is nothing to draw.
pub fn layout_popup(
    anchor: Position,
    label_width: usize,
    candidates: &[Candidate],
    screen_width: usize,
    screen_height: usize,
    options: &PopupLayoutOptions,
) -> Rect {
    layout_popup_with(
        anchor,
        label_width,
        candidates,
        (screen_width, screen_height),
        options,
        visible_width,
    )
}

/// Same as [`layout_popup`] with a caller-supplied display-width measure.
pub fn layout_popup_with<M>(
    anchor: Position,
    label_width: usize,
    candidates: &[Candidate],
    (screen_width, screen_height): (usize, usize),
    options: &PopupLayoutOptions,
    measure: M,
) -> Rect
where
    M: Fn(&str) -> usize,
{
    if candidates.is_empty() || screen_width == 0 || screen_height == 0 {
        return Rect::default();
    }

    let content_width = candidates
        .iter()
        .map(|candidate| {
            measure(&candidate.value).saturating_add(measure(&candidate.description))
        })
        .max()
        .unwrap_or(0);
    let mut width = content_width.saturating_add(POPUP_PADDING).max(options.min_width);

    let mut height = candidates.len().saturating_add(POPUP_PADDING);
    if let Some(max_height) = options.max_height {
        height = height.min(max_height);
    }

    let mut x = anchor
        .x
        .saturating_add(label_width)
        .saturating_add(options.horizontal_offset);
    let mut y = anchor.y.saturating_add(1);

    if y.saturating_add(height) > screen_height {
        let space_above = anchor.y.saturating_sub(2);
        let space_below = screen_height.saturating_sub(anchor.y);
        if space_above > space_below {
            y = anchor.y.saturating_sub(height);
            tracing::trace!(
                target: "inputbar::layout",
                anchor_y = anchor.y,
                height,
                y,
                "popup flipped above cursor"
            );
        }
    }

    if y.saturating_add(height) > screen_height {
        height = screen_height.saturating_sub(y);
        tracing::trace!(target: "inputbar::layout", y, height, "popup height truncated");
    }

    if x.saturating_add(width) > screen_width {
        x = screen_width.saturating_sub(width);
    }
    width = width.min(screen_width);

    Rect::new(x, y, width, height)
}
