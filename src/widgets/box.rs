//! Box widget: an optional border with a title around a content area.

use std::boxed::Box as StdBox;

use crate::core::component::{Component, Focusable};
use crate::core::geometry::Rect;
use crate::core::screen::Screen;
use crate::core::text::utils::truncate_to_width;
use crate::core::text::width::visible_width;

pub struct Box {
    border: bool,
    title: String,
    focused: bool,
    border_fn: Option<StdBox<dyn Fn(&str) -> String + Send>>,
    focused_border_fn: Option<StdBox<dyn Fn(&str) -> String + Send>>,
}

impl Box {
    pub fn new() -> Self {
        Self {
            border: false,
            title: String::new(),
            focused: false,
            border_fn: None,
            focused_border_fn: None,
        }
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_border_fn(&mut self, border_fn: Option<StdBox<dyn Fn(&str) -> String + Send>>) {
        self.border_fn = border_fn;
    }

    pub fn set_focused_border_fn(
        &mut self,
        border_fn: Option<StdBox<dyn Fn(&str) -> String + Send>>,
    ) {
        self.focused_border_fn = border_fn;
    }

    /// Rows the frame adds above and below its content.
    pub fn vertical_chrome(&self) -> usize {
        if self.border {
            2
        } else {
            0
        }
    }

    /// The content area inside the frame.
    pub fn inner(&self, area: Rect) -> Rect {
        if self.border {
            area.shrink(1)
        } else {
            area
        }
    }

    fn style(&self, text: &str) -> String {
        let style_fn = if self.focused {
            self.focused_border_fn.as_ref().or(self.border_fn.as_ref())
        } else {
            self.border_fn.as_ref()
        };
        match style_fn {
            Some(style_fn) => style_fn(text),
            None => text.to_string(),
        }
    }

    fn top_edge(&self, width: usize) -> String {
        let inner_width = width - 2;
        let title = truncate_to_width(&self.title, inner_width, "", false);
        let title_width = visible_width(&title);
        format!("┌{title}{}┐", "─".repeat(inner_width - title_width))
    }
}

impl Default for Box {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Box {
    fn draw(&self, screen: &mut dyn Screen, area: Rect) {
        let area = area.intersection(screen.bounds());
        if area.is_empty() {
            return;
        }
        screen.fill(area, ' ');
        if !self.border || area.width < 2 || area.height < 2 {
            return;
        }

        let top = self.style(&self.top_edge(area.width));
        let bottom = self.style(&format!("└{}┘", "─".repeat(area.width - 2)));
        let side = self.style("│");

        screen.put_str(area.x, area.y, &top, area.width);
        for row in area.y + 1..area.bottom() - 1 {
            screen.put_str(area.x, row, &side, 1);
            screen.put_str(area.right() - 1, row, &side, 1);
        }
        screen.put_str(area.x, area.bottom() - 1, &bottom, area.width);
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Box {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::Box as BoxWidget;
    use crate::core::component::{Component, Focusable};
    use crate::core::geometry::Rect;
    use crate::render::CellGrid;
    use std::boxed::Box as StdBox;

    #[test]
    fn border_and_title_are_drawn() {
        let mut frame = BoxWidget::new();
        frame.set_border(true);
        frame.set_title("Find");

        let mut grid = CellGrid::new(8, 3);
        frame.draw(&mut grid, Rect::new(0, 0, 8, 3));
        assert_eq!(grid.line(0), "┌Find──┐");
        assert_eq!(grid.line(1), "│      │");
        assert_eq!(grid.line(2), "└──────┘");
    }

    #[test]
    fn inner_depends_on_border() {
        let mut frame = BoxWidget::new();
        let area = Rect::new(2, 2, 10, 3);
        assert_eq!(frame.inner(area), area);
        assert_eq!(frame.vertical_chrome(), 0);

        frame.set_border(true);
        assert_eq!(frame.inner(area), Rect::new(3, 3, 8, 1));
        assert_eq!(frame.vertical_chrome(), 2);
    }

    #[test]
    fn long_title_is_cut_to_fit() {
        let mut frame = BoxWidget::new();
        frame.set_border(true);
        frame.set_title("A very long title");

        let mut grid = CellGrid::new(6, 2);
        frame.draw(&mut grid, Rect::new(0, 0, 6, 2));
        assert_eq!(grid.line(0), "┌A ve┐");
    }

    #[test]
    fn focused_border_uses_focus_style() {
        let mut frame = BoxWidget::new();
        frame.set_border(true);
        frame.set_focused_border_fn(Some(StdBox::new(|text| format!("\x1b[1m{text}\x1b[0m"))));

        let mut grid = CellGrid::new(4, 2);
        frame.draw(&mut grid, Rect::new(0, 0, 4, 2));
        assert!(grid.cell(0, 0).unwrap().style.is_empty());

        frame.set_focused(true);
        frame.draw(&mut grid, Rect::new(0, 0, 4, 2));
        assert_eq!(grid.cell(0, 0).unwrap().style, "\x1b[1m");
    }
}
