//! Single-line text area.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::component::{Component, Focusable};
use crate::core::editor_component::{AcceptFunc, TextEditor};
use crate::core::geometry::{Position, Rect};
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{default_keybindings_handle, EditorAction, KeybindingsHandle};
use crate::core::screen::Screen;
use crate::core::text::utils::{grapheme_segments, is_punctuation_char, is_whitespace_char};
use crate::core::text::width::{grapheme_width, visible_width};

/// Editable one-line buffer with a label and horizontal scrolling.
pub struct TextArea {
    value: String,
    cursor: usize,
    focused: bool,
    label: String,
    label_width: usize,
    min_cursor_padding: usize,
    keybindings: KeybindingsHandle,
    accept: Option<AcceptFunc>,
}

impl TextArea {
    pub fn new(keybindings: KeybindingsHandle) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            label: String::new(),
            label_width: 0,
            min_cursor_padding: 0,
            keybindings,
            accept: None,
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor > self.value.len() {
            self.cursor = self.value.len();
        }
        while self.cursor > 0 && !self.value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn cursor_column(&self) -> usize {
        visible_width(&self.value[..self.cursor])
    }

    /// Runs the input filter over every character `text` would add.
    fn accepts(&mut self, text: &str) -> bool {
        let Some(accept) = self.accept.as_mut() else {
            return true;
        };
        let mut next = self.value[..self.cursor].to_string();
        for ch in text.chars() {
            next.push(ch);
            let candidate = format!("{next}{}", &self.value[self.cursor..]);
            if !accept(&candidate, ch) {
                return false;
            }
        }
        true
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() || !self.accepts(text) {
            return;
        }
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn handle_paste(&mut self, pasted_text: &str) {
        let cleaned = pasted_text.replace(['\r', '\n'], "");
        self.insert_text(&cleaned);
    }

    fn is_whitespace_segment(segment: &str) -> bool {
        segment.chars().any(is_whitespace_char)
    }

    fn is_punctuation_segment(segment: &str) -> bool {
        segment.chars().any(is_punctuation_char)
    }

    fn previous_grapheme_len(&self) -> usize {
        grapheme_segments(&self.value[..self.cursor])
            .next_back()
            .map_or(0, str::len)
    }

    fn next_grapheme_len(&self) -> usize {
        grapheme_segments(&self.value[self.cursor..])
            .next()
            .map_or(0, str::len)
    }

    fn delete_word_backwards(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor;
        self.move_word_backwards();
        self.value.replace_range(self.cursor..end, "");
    }

    fn move_word_backwards(&mut self) {
        let mut graphemes: Vec<&str> = grapheme_segments(&self.value[..self.cursor]).collect();
        let mut cursor = self.cursor;

        while let Some(last) = graphemes.last() {
            if !Self::is_whitespace_segment(last) {
                break;
            }
            cursor -= last.len();
            graphemes.pop();
        }

        let punctuation = graphemes
            .last()
            .is_some_and(|last| Self::is_punctuation_segment(last));
        while let Some(last) = graphemes.last() {
            let same_class = if punctuation {
                Self::is_punctuation_segment(last)
            } else {
                !Self::is_whitespace_segment(last) && !Self::is_punctuation_segment(last)
            };
            if !same_class {
                break;
            }
            cursor -= last.len();
            graphemes.pop();
        }

        self.cursor = cursor;
    }

    fn move_word_forwards(&mut self) {
        let mut iter = grapheme_segments(&self.value[self.cursor..]).peekable();
        let mut cursor = self.cursor;

        while let Some(seg) = iter.next_if(|seg| Self::is_whitespace_segment(seg)) {
            cursor += seg.len();
        }

        let punctuation = iter
            .peek()
            .is_some_and(|seg| Self::is_punctuation_segment(seg));
        while let Some(seg) = iter.next_if(|seg| {
            if punctuation {
                Self::is_punctuation_segment(seg)
            } else {
                !Self::is_whitespace_segment(seg) && !Self::is_punctuation_segment(seg)
            }
        }) {
            cursor += seg.len();
        }

        self.cursor = cursor;
    }

    /// Byte offset of the first visible grapheme and its column, for a field `field_width` wide.
    fn scroll_start(&self, field_width: usize) -> (usize, usize) {
        let cursor_column = self.cursor_column();
        let needed = cursor_column + self.min_cursor_padding + 1;
        let skip = needed.saturating_sub(field_width).min(cursor_column);
        if skip == 0 {
            return (0, 0);
        }

        let mut column = 0;
        for (offset, grapheme) in self.value.grapheme_indices(true) {
            if column >= skip {
                return (offset, column);
            }
            column += grapheme_width(grapheme);
        }
        (self.value.len(), column)
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new(default_keybindings_handle())
    }
}

impl Component for TextArea {
    fn draw(&self, screen: &mut dyn Screen, area: Rect) {
        let area = area.intersection(screen.bounds());
        if area.is_empty() {
            return;
        }

        screen.fill(area, ' ');
        let label_width = self.label_width().min(area.width);
        if label_width > 0 {
            screen.put_str(area.x, area.y, &self.label, label_width);
        }

        let field_width = area.width - label_width;
        if field_width == 0 {
            return;
        }
        let field_x = area.x + label_width;
        let (start, start_column) = self.scroll_start(field_width);
        screen.put_str(field_x, area.y, &self.value[start..], field_width);

        if self.focused {
            let column = self.cursor_column().saturating_sub(start_column);
            if column < field_width {
                screen.set_cursor(Some(Position::new(field_x + column, area.y)));
            }
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        self.clamp_cursor();

        let key_id = match event {
            InputEvent::Text { text, .. } => {
                self.insert_text(text);
                return;
            }
            InputEvent::Paste { text, .. } => {
                self.handle_paste(text);
                return;
            }
            InputEvent::Key { key_id, .. } => key_id.as_str(),
            _ => return,
        };

        let action = {
            let kb = self.keybindings.lock();
            [
                EditorAction::DeleteCharBackward,
                EditorAction::DeleteCharForward,
                EditorAction::DeleteWordBackward,
                EditorAction::DeleteToLineStart,
                EditorAction::DeleteToLineEnd,
                EditorAction::CursorLeft,
                EditorAction::CursorRight,
                EditorAction::CursorLineStart,
                EditorAction::CursorLineEnd,
                EditorAction::CursorWordLeft,
                EditorAction::CursorWordRight,
            ]
            .into_iter()
            .find(|action| kb.matches(key_id, *action))
        };
        let Some(action) = action else {
            return;
        };

        match action {
            EditorAction::DeleteCharBackward => {
                let len = self.previous_grapheme_len();
                let start = self.cursor - len;
                self.value.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            EditorAction::DeleteCharForward => {
                let len = self.next_grapheme_len();
                self.value.replace_range(self.cursor..self.cursor + len, "");
            }
            EditorAction::DeleteWordBackward => self.delete_word_backwards(),
            EditorAction::DeleteToLineStart => {
                self.value.replace_range(..self.cursor, "");
                self.cursor = 0;
            }
            EditorAction::DeleteToLineEnd => self.value.truncate(self.cursor),
            EditorAction::CursorLeft => self.cursor -= self.previous_grapheme_len(),
            EditorAction::CursorRight => self.cursor += self.next_grapheme_len(),
            EditorAction::CursorLineStart => self.cursor = 0,
            EditorAction::CursorLineEnd => self.cursor = self.value.len(),
            EditorAction::CursorWordLeft => self.move_word_backwards(),
            EditorAction::CursorWordRight => self.move_word_forwards(),
            _ => {}
        }
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for TextArea {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl TextEditor for TextArea {
    fn get_text(&self) -> String {
        self.value.clone()
    }

    fn set_text(&mut self, text: &str, cursor_at_end: bool) {
        self.value = text.to_string();
        if cursor_at_end {
            self.cursor = self.value.len();
        }
        self.clamp_cursor();
    }

    fn get_cursor(&self) -> (usize, usize, usize, usize) {
        let column = self.cursor_column();
        (0, column, 0, column)
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_label_width(&mut self, width: usize) {
        self.label_width = width;
    }

    fn label_width(&self) -> usize {
        if self.label_width > 0 {
            self.label_width
        } else {
            visible_width(&self.label)
        }
    }

    fn set_accept(&mut self, accept: Option<AcceptFunc>) {
        self.accept = accept;
    }

    fn set_min_cursor_padding(&mut self, columns: usize) {
        self.min_cursor_padding = columns;
    }
}
