//! SelectList widget, used as the autocomplete popup.

use std::boxed::Box as StdBox;

use crate::core::component::Component;
use crate::core::geometry::{Position, Rect};
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{default_keybindings_handle, EditorAction, KeybindingsHandle};
use crate::core::list_component::{ItemSelectCallback, ListItemCallback, SelectableList};
use crate::core::screen::Screen;
use crate::core::text::utils::{normalize_to_single_line, truncate_to_width};

pub struct SelectListTheme {
    pub selected: StdBox<dyn Fn(&str) -> String + Send>,
    pub description: StdBox<dyn Fn(&str) -> String + Send>,
    pub border: StdBox<dyn Fn(&str) -> String + Send>,
}

impl Default for SelectListTheme {
    fn default() -> Self {
        Self {
            selected: StdBox::new(|text| format!("\x1b[7m{text}\x1b[0m")),
            description: StdBox::new(|text| format!("\x1b[2m{text}\x1b[22m")),
            border: StdBox::new(|text| text.to_string()),
        }
    }
}

struct ListItem {
    primary: String,
    secondary: String,
    shortcut: Option<char>,
    on_select: Option<ItemSelectCallback>,
}

pub struct SelectList {
    items: Vec<ListItem>,
    current: usize,
    rect: Rect,
    min_width: usize,
    keybindings: KeybindingsHandle,
    theme: SelectListTheme,
    on_selection_change: Option<ListItemCallback>,
    on_item_activated: Option<ListItemCallback>,
}

impl SelectList {
    pub fn new(keybindings: KeybindingsHandle, theme: SelectListTheme) -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            rect: Rect::default(),
            min_width: 0,
            keybindings,
            theme,
            on_selection_change: None,
            on_item_activated: None,
        }
    }

    pub fn set_min_width(&mut self, min_width: usize) {
        self.min_width = min_width;
    }

    pub fn set_theme(&mut self, theme: SelectListTheme) {
        self.theme = theme;
    }

    fn move_by(&mut self, forward: bool) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.current = match (forward, self.current) {
            (true, current) if current >= last => 0,
            (true, current) => current + 1,
            (false, 0) => last,
            (false, current) => current - 1,
        };
        self.notify_selection_change();
    }

    fn notify_selection_change(&mut self) {
        let Some(item) = self.items.get(self.current) else {
            return;
        };
        if let Some(handler) = self.on_selection_change.as_mut() {
            handler(self.current, &item.primary, &item.secondary);
        }
    }

    /// Area used for rows: inside the border when there is room for one.
    fn content_rect(area: Rect) -> Rect {
        if area.width >= 2 && area.height >= 2 {
            area.shrink(1)
        } else {
            area
        }
    }

    /// First visible item so that the current item stays on screen.
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 || self.current < visible_rows {
            0
        } else {
            self.current + 1 - visible_rows
        }
    }

    fn draw_border(&self, screen: &mut dyn Screen, area: Rect) {
        let inner_width = area.width - 2;
        let horizontal = "─".repeat(inner_width);
        let top = (self.theme.border)(&format!("┌{horizontal}┐"));
        let bottom = (self.theme.border)(&format!("└{horizontal}┘"));
        let side = (self.theme.border)("│");

        screen.put_str(area.x, area.y, &top, area.width);
        for row in area.y + 1..area.bottom() - 1 {
            screen.put_str(area.x, row, &side, 1);
            screen.put_str(area.right() - 1, row, &side, 1);
        }
        screen.put_str(area.x, area.bottom() - 1, &bottom, area.width);
    }

    fn render_row(&self, item: &ListItem, width: usize, selected: bool) -> String {
        let primary = normalize_to_single_line(&item.primary);
        let secondary = normalize_to_single_line(&item.secondary);
        let mut line = primary;
        if !secondary.is_empty() {
            line.push_str(&(self.theme.description)(&secondary));
        }
        let line = truncate_to_width(&line, width, "", true);
        if selected {
            (self.theme.selected)(&line)
        } else {
            line
        }
    }
}

impl Default for SelectList {
    fn default() -> Self {
        Self::new(default_keybindings_handle(), SelectListTheme::default())
    }
}

impl Component for SelectList {
    fn draw(&self, screen: &mut dyn Screen, area: Rect) {
        let area = area.intersection(screen.bounds());
        if area.is_empty() {
            return;
        }

        screen.fill(area, ' ');
        let content = Self::content_rect(area);
        if content != area {
            self.draw_border(screen, area);
        }
        if content.is_empty() {
            return;
        }

        let offset = self.scroll_offset(content.height);
        for (row, (index, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(content.height)
            .enumerate()
        {
            let line = self.render_row(item, content.width, index == self.current);
            screen.put_str(content.x, content.y + row, &line, content.width);
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key_id, .. } => {
                let (is_up, is_down, is_confirm) = {
                    let kb = self.keybindings.lock();
                    (
                        kb.matches(key_id, EditorAction::SelectUp),
                        kb.matches(key_id, EditorAction::SelectDown),
                        kb.matches(key_id, EditorAction::SelectConfirm),
                    )
                };
                if is_down {
                    self.move_by(true);
                } else if is_up {
                    self.move_by(false);
                } else if is_confirm {
                    self.activate(self.current);
                }
            }
            InputEvent::Text { text, .. } => {
                let mut chars = text.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return;
                };
                if let Some(index) = self.items.iter().position(|item| item.shortcut == Some(ch)) {
                    self.current = index;
                    self.activate(index);
                }
            }
            _ => {}
        }
    }
}

impl SelectableList for SelectList {
    fn clear(&mut self) {
        self.items.clear();
        self.current = 0;
    }

    fn add_item(
        &mut self,
        primary: &str,
        secondary: &str,
        shortcut: Option<char>,
        on_select: Option<ItemSelectCallback>,
    ) {
        self.items.push(ListItem {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            shortcut,
            on_select,
        });
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_text(&self, index: usize) -> Option<(&str, &str)> {
        self.items
            .get(index)
            .map(|item| (item.primary.as_str(), item.secondary.as_str()))
    }

    fn current_item(&self) -> usize {
        self.current
    }

    fn set_current_item(&mut self, index: usize) {
        self.current = index.min(self.items.len().saturating_sub(1));
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_on_selection_change(&mut self, handler: Option<ListItemCallback>) {
        self.on_selection_change = handler;
    }

    fn set_on_item_activated(&mut self, handler: Option<ListItemCallback>) {
        self.on_item_activated = handler;
    }

    fn activate(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        if let Some(on_select) = item.on_select.as_mut() {
            on_select();
        }
        if let Some(handler) = self.on_item_activated.as_mut() {
            let item = &self.items[index];
            handler(index, &item.primary, &item.secondary);
        }
    }

    fn item_at(&self, position: Position) -> Option<usize> {
        let content = Self::content_rect(self.rect);
        if !content.contains(position) {
            return None;
        }
        let index = self.scroll_offset(content.height) + (position.y - content.y);
        (index < self.items.len()).then_some(index)
    }

    fn min_width(&self) -> usize {
        self.min_width
    }
}
