//! Input bar: a one-line text field with an autocomplete popup.
//!
//! Key events are routed either to the popup (while it is open and the key is a navigation
//! key) or to the text editor. After every event the committed text is compared with its value
//! at the start of the event; a difference fires the `changed` callback once. While the user
//! navigates the popup, the highlighted candidate is shown in the field as a preview that only
//! becomes committed text on Enter or click.
//!
//! [`InputBar`] is `Send` but not `Sync`: to draw it from another thread, share it behind a
//! mutex owned by the host.

use crate::core::autocomplete::{
    AutocompleteCoordinator, AutocompleteFunc, AutocompletedSource, Candidate, ListSignal,
};
use crate::core::component::{Component, Focusable};
use crate::core::editor_component::{AcceptFunc, TextEditor};
use crate::core::geometry::{Position, Rect};
use crate::core::input_event::{InputEvent, MouseKind};
use crate::core::keybindings::{default_keybindings_handle, EditorAction, KeybindingsHandle};
use crate::core::list_component::SelectableList;
use crate::core::popup_layout::PopupLayoutOptions;
use crate::core::screen::Screen;
use crate::widgets::r#box::Box;
use crate::widgets::select_list::{SelectList, SelectListTheme};
use crate::widgets::text_area::TextArea;

/// Called with the new committed text.
pub type ChangedFunc = std::boxed::Box<dyn FnMut(&str) + Send>;

/// Called with `(value, index, source)` when a candidate is highlighted or chosen. Returning
/// `true` during navigation closes the popup instead of previewing the value, and discards any
/// preview already shown. The return value is ignored for `Enter` and `Click`.
pub type AutocompletedFunc =
    std::boxed::Box<dyn FnMut(&str, usize, AutocompletedSource) -> bool + Send>;

/// Called with the key that ended editing.
pub type DoneFunc = std::boxed::Box<dyn FnMut(DoneKey) + Send>;

/// Keys that end editing while no popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneKey {
    Enter,
    Escape,
    Tab,
    BackTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Editing,
    Suggesting,
}

pub struct InputBar<E: TextEditor = TextArea, L: SelectableList = SelectList> {
    editor: E,
    frame: Box,
    autocomplete: AutocompleteCoordinator<L>,
    keybindings: KeybindingsHandle,
    layout: PopupLayoutOptions,
    field_width: usize,
    /// Committed text while the field shows a previewed candidate.
    preview_of: Option<String>,
    on_autocompleted: Option<AutocompletedFunc>,
    on_changed: Option<ChangedFunc>,
    on_done: Option<DoneFunc>,
    on_finished: Option<DoneFunc>,
}

impl InputBar {
    pub fn new() -> Self {
        let keybindings = default_keybindings_handle();
        Self::with_parts(
            TextArea::new(keybindings.clone()),
            SelectList::new(keybindings.clone(), SelectListTheme::default()),
            keybindings,
        )
    }
}

impl Default for InputBar {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextEditor, L: SelectableList> InputBar<E, L> {
    /// Builds an input bar around an editor and a popup list sharing `keybindings`.
    pub fn with_parts(editor: E, list: L, keybindings: KeybindingsHandle) -> Self {
        Self {
            editor,
            frame: Box::new(),
            autocomplete: AutocompleteCoordinator::new(list),
            keybindings,
            layout: PopupLayoutOptions::default(),
            field_width: 0,
            preview_of: None,
            on_autocompleted: None,
            on_changed: None,
            on_done: None,
            on_finished: None,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn keybindings(&self) -> KeybindingsHandle {
        self.keybindings.clone()
    }

    /// Installs the candidate provider and runs it on the current text.
    pub fn set_autocomplete_func(&mut self, provider: Option<AutocompleteFunc>) {
        self.autocomplete.set_provider(provider);
        self.autocomplete();
    }

    /// Shows `items` directly, ranked like provider results.
    pub fn set_autocomplete_list(&mut self, items: Vec<Candidate>) {
        self.autocomplete.set_candidates(items);
    }

    /// Reruns the provider on the current text.
    pub fn autocomplete(&mut self) {
        let text = self.editor.get_text();
        let (_, _, row, _) = self.editor.get_cursor();
        self.autocomplete.refresh(&text, row);
    }

    pub fn set_autocompleted(&mut self, handler: Option<AutocompletedFunc>) {
        self.on_autocompleted = handler;
    }

    pub fn set_changed(&mut self, handler: Option<ChangedFunc>) {
        self.on_changed = handler;
    }

    pub fn set_done(&mut self, handler: Option<DoneFunc>) {
        self.on_done = handler;
    }

    pub fn set_finished(&mut self, handler: Option<DoneFunc>) {
        self.on_finished = handler;
    }

    pub fn set_accept(&mut self, accept: Option<AcceptFunc>) {
        self.editor.set_accept(accept);
    }

    pub fn set_label(&mut self, label: &str) {
        self.editor.set_label(label);
    }

    pub fn set_label_width(&mut self, width: usize) {
        self.editor.set_label_width(width);
    }

    /// Width of the editable area; 0 fills whatever the label leaves.
    pub fn set_field_width(&mut self, width: usize) {
        self.field_width = width;
    }

    pub fn set_border(&mut self, border: bool) {
        self.frame.set_border(border);
    }

    pub fn set_title(&mut self, title: &str) {
        self.frame.set_title(title);
    }

    pub fn set_popup_layout(&mut self, layout: PopupLayoutOptions) {
        self.layout = layout;
    }

    /// Replaces the text without notifying `changed` or refreshing candidates.
    pub fn set_text(&mut self, text: &str) {
        self.preview_of = None;
        self.editor.set_text(text, true);
    }

    /// The text shown in the field, including a previewed candidate.
    pub fn get_text(&self) -> String {
        self.editor.get_text()
    }

    pub fn get_cursor(&self) -> (usize, usize, usize, usize) {
        self.editor.get_cursor()
    }

    pub fn is_autocomplete_visible(&self) -> bool {
        self.autocomplete.is_visible()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.autocomplete.candidates()
    }

    /// Rectangle of the popup as last drawn.
    pub fn popup_geometry(&self) -> Option<Rect> {
        self.autocomplete.geometry()
    }

    pub fn state(&self) -> DispatchState {
        if self.autocomplete.is_visible() {
            DispatchState::Suggesting
        } else {
            DispatchState::Editing
        }
    }

    /// Rows needed to draw the bar (three with a border, one without).
    pub fn height(&self) -> usize {
        1 + self.frame.vertical_chrome()
    }

    pub fn focus(&mut self) {
        self.editor.focus();
    }

    pub fn blur(&mut self) {
        self.editor.blur();
        self.frame.set_focused(false);
    }

    pub fn has_focus(&self) -> bool {
        self.editor.has_focus() || self.frame.is_focused()
    }

    fn committed_text(&self) -> String {
        match &self.preview_of {
            Some(committed) => committed.clone(),
            None => self.editor.get_text(),
        }
    }

    fn key_matches(&self, key_id: &str, actions: &[EditorAction]) -> bool {
        let kb = self.keybindings.lock();
        actions.iter().any(|action| kb.matches(key_id, *action))
    }

    fn done_key(&self, key_id: &str) -> Option<DoneKey> {
        let kb = self.keybindings.lock();
        [
            (EditorAction::Submit, DoneKey::Enter),
            (EditorAction::SelectCancel, DoneKey::Escape),
            (EditorAction::NextField, DoneKey::Tab),
            (EditorAction::PreviousField, DoneKey::BackTab),
        ]
        .into_iter()
        .find(|(action, _)| kb.matches(key_id, *action))
        .map(|(_, key)| key)
    }

    /// Sends `event` to the editor; returns whether the text changed.
    fn forward_to_editor(&mut self, event: &InputEvent) -> bool {
        let before = self.editor.get_text();
        self.editor.handle_event(event);
        let changed = self.editor.get_text() != before;
        if changed {
            // An edit on top of a preview makes the edited text the committed text.
            self.preview_of = None;
        }
        changed
    }

    fn preview(&mut self, index: usize, value: &str) {
        let close = match self.on_autocompleted.as_mut() {
            Some(handler) => handler(value, index, AutocompletedSource::Navigate),
            None => false,
        };
        if close {
            self.dismiss_popup();
            return;
        }
        if self.preview_of.is_none() {
            self.preview_of = Some(self.editor.get_text());
        }
        self.editor.set_text(value, true);
    }

    fn commit(&mut self, index: usize, value: &str, source: AutocompletedSource) {
        if let Some(handler) = self.on_autocompleted.as_mut() {
            handler(value, index, source);
        }
        tracing::debug!(target: "inputbar::dispatch", index, ?source, "candidate committed");
        self.preview_of = None;
        self.editor.set_text(value, true);
        self.autocomplete.clear();
    }

    fn apply_signals(&mut self, signals: Vec<ListSignal>, source: AutocompletedSource) {
        for signal in signals {
            match signal {
                ListSignal::SelectionChanged { index, value } => self.preview(index, &value),
                ListSignal::Activated { index, value } => self.commit(index, &value, source),
            }
        }
    }

    fn dismiss_popup(&mut self) {
        if let Some(committed) = self.preview_of.take() {
            self.editor.set_text(&committed, true);
        }
        self.autocomplete.dismiss();
    }

    fn notify_done(&mut self, key: DoneKey) {
        if let Some(handler) = self.on_done.as_mut() {
            handler(key);
        }
        if let Some(handler) = self.on_finished.as_mut() {
            handler(key);
        }
    }

    /// Routes one event; returns whether the editor text was edited.
    fn dispatch(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { key_id, .. } if self.autocomplete.is_visible() => {
                if self.key_matches(key_id, &[EditorAction::SelectCancel]) {
                    self.dismiss_popup();
                    false
                } else if self.key_matches(key_id, &[EditorAction::SelectUp, EditorAction::SelectDown])
                {
                    let signals = self.autocomplete.navigate(event);
                    self.apply_signals(signals, AutocompletedSource::Navigate);
                    false
                } else if self.key_matches(key_id, &[EditorAction::SelectConfirm]) {
                    if let Some((index, value)) = self.autocomplete.current() {
                        self.commit(index, &value, AutocompletedSource::Enter);
                    }
                    false
                } else {
                    self.forward_to_editor(event)
                }
            }
            InputEvent::Key { key_id, .. } => {
                let changed = self.forward_to_editor(event);
                if let Some(key) = self.done_key(key_id) {
                    self.notify_done(key);
                }
                changed
            }
            InputEvent::Mouse {
                column,
                row,
                kind: MouseKind::LeftDown,
                ..
            } => {
                let position = Position::new(*column, *row);
                if self.autocomplete.hit_test(position) {
                    let signals = self.autocomplete.click(position);
                    self.apply_signals(signals, AutocompletedSource::Click);
                }
                false
            }
            InputEvent::Text { .. } | InputEvent::Paste { .. } => self.forward_to_editor(event),
            _ => false,
        }
    }
}

impl<E: TextEditor, L: SelectableList> Component for InputBar<E, L> {
    fn draw(&self, screen: &mut dyn Screen, area: Rect) {
        let area = area.intersection(screen.bounds());
        if area.is_empty() {
            return;
        }
        self.frame.draw(screen, area);

        let inner = self.frame.inner(area);
        if inner.is_empty() {
            return;
        }
        let label_width = self.editor.label_width();
        let field_width = if self.field_width == 0 {
            inner.width.saturating_sub(label_width)
        } else {
            self.field_width
        };
        let field = Rect::new(
            inner.x,
            inner.y,
            (label_width + field_width).min(inner.width),
            1,
        );
        self.editor.draw(screen, field);

        self.autocomplete.draw(
            screen,
            Position::new(inner.x, inner.y),
            label_width,
            &self.layout,
        );
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let committed_before = self.committed_text();

        if self.dispatch(event) {
            let text = self.editor.get_text();
            let (_, _, row, _) = self.editor.get_cursor();
            self.autocomplete.refresh(&text, row);
        }

        let committed_after = self.committed_text();
        if committed_after != committed_before {
            tracing::trace!(
                target: "inputbar::dispatch",
                len = committed_after.len(),
                "committed text changed"
            );
            if let Some(handler) = self.on_changed.as_mut() {
                handler(&committed_after);
            }
        }
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl<E: TextEditor, L: SelectableList> Focusable for InputBar<E, L> {
    fn set_focused(&mut self, focused: bool) {
        if focused {
            self.focus();
        } else {
            self.blur();
        }
    }

    fn is_focused(&self) -> bool {
        self.has_focus()
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchState, DoneKey, InputBar};
    use crate::core::autocomplete::{AutocompletedSource, Candidate};
    use crate::core::component::Component;
    use crate::core::geometry::{Position, Rect};
    use crate::core::input_event::{parse_input_events, InputEvent, MouseKind};
    use crate::render::CellGrid;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn send(bar: &mut InputBar, data: &str) {
        for event in parse_input_events(data) {
            bar.handle_event(&event);
        }
    }

    fn prefix_provider(words: &'static [&'static str]) -> super::AutocompleteFunc {
        Box::new(move |text, _| {
            words
                .iter()
                .filter(|word| word.starts_with(text))
                .map(|word| Candidate::new(word.to_string(), "", 0))
                .collect()
        })
    }

    fn record_changes(bar: &mut InputBar) -> Arc<Mutex<Vec<String>>> {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        bar.set_changed(Some(Box::new(move |text| sink.lock().push(text.to_string()))));
        changes
    }

    #[test]
    fn typing_refreshes_candidates() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_func(Some(prefix_provider(&["apple", "apricot", "banana"])));
        assert!(!bar.is_autocomplete_visible());

        send(&mut bar, "a");
        assert!(bar.is_autocomplete_visible());
        assert_eq!(bar.state(), DispatchState::Suggesting);
        assert_eq!(bar.candidates().len(), 2);

        send(&mut bar, "x");
        assert!(!bar.is_autocomplete_visible());
        assert_eq!(bar.state(), DispatchState::Editing);
    }

    #[test]
    fn provider_returning_nothing_hides_popup() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_func(Some(Box::new(|_, _| Vec::new())));
        send(&mut bar, "x");
        send(&mut bar, "y");
        assert_eq!(bar.get_text(), "xy");
        assert!(!bar.is_autocomplete_visible());
    }

    #[test]
    fn tab_previews_and_enter_commits() {
        let mut bar = InputBar::new();
        let changes = record_changes(&mut bar);
        bar.set_autocomplete_func(Some(Box::new(|text, _| {
            if text == "ab" {
                vec![Candidate::new("x", "", 0), Candidate::new("abc", "", 0)]
            } else {
                Vec::new()
            }
        })));

        send(&mut bar, "a");
        send(&mut bar, "b");
        assert!(bar.is_autocomplete_visible());
        changes.lock().clear();

        send(&mut bar, "\t");
        assert_eq!(bar.get_text(), "abc");
        assert!(bar.is_autocomplete_visible());
        assert!(changes.lock().is_empty());

        send(&mut bar, "\r");
        assert_eq!(bar.get_text(), "abc");
        assert!(!bar.is_autocomplete_visible());
        assert_eq!(changes.lock().as_slice(), &["abc".to_string()]);
    }

    #[test]
    fn escape_restores_committed_text() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_func(Some(prefix_provider(&["abc", "abd"])));
        send(&mut bar, "a");
        let changes = record_changes(&mut bar);

        send(&mut bar, "\x1b[B");
        assert_eq!(bar.get_text(), "abd");

        send(&mut bar, "\x1b");
        assert_eq!(bar.get_text(), "a");
        assert!(!bar.is_autocomplete_visible());
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn escape_while_editing_notifies_done_and_finished() {
        let mut bar = InputBar::new();
        let keys = Arc::new(Mutex::new(Vec::new()));
        let done = Arc::clone(&keys);
        bar.set_done(Some(Box::new(move |key| done.lock().push(("done", key)))));
        let finished = Arc::clone(&keys);
        bar.set_finished(Some(Box::new(move |key| finished.lock().push(("finished", key)))));

        send(&mut bar, "\x1b");
        send(&mut bar, "\x1b[Z");
        assert_eq!(
            keys.lock().as_slice(),
            &[
                ("done", DoneKey::Escape),
                ("finished", DoneKey::Escape),
                ("done", DoneKey::BackTab),
                ("finished", DoneKey::BackTab),
            ]
        );
    }

    #[test]
    fn enter_while_suggesting_does_not_notify_done() {
        let mut bar = InputBar::new();
        let keys = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&keys);
        bar.set_done(Some(Box::new(move |key| sink.lock().push(key))));
        bar.set_autocomplete_func(Some(prefix_provider(&["abc"])));

        send(&mut bar, "a");
        send(&mut bar, "\r");
        assert_eq!(bar.get_text(), "abc");
        assert!(keys.lock().is_empty());

        send(&mut bar, "\r");
        assert_eq!(keys.lock().as_slice(), &[DoneKey::Enter]);
    }

    #[test]
    fn autocompleted_callback_can_close_popup() {
        let mut bar = InputBar::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bar.set_autocompleted(Some(Box::new(move |text, index, source| {
            sink.lock().push((text.to_string(), index, source));
            true
        })));
        bar.set_autocomplete_func(Some(prefix_provider(&["abc", "abd"])));

        send(&mut bar, "a");
        send(&mut bar, "\x1b[B");
        assert!(!bar.is_autocomplete_visible());
        assert_eq!(bar.get_text(), "a");
        assert_eq!(
            seen.lock().as_slice(),
            &[("abd".to_string(), 1, AutocompletedSource::Navigate)]
        );
    }

    #[test]
    fn closing_from_autocompleted_discards_earlier_preview() {
        let mut bar = InputBar::new();
        let calls = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&calls);
        bar.set_autocompleted(Some(Box::new(move |_, _, _| {
            let mut calls = counter.lock();
            *calls += 1;
            *calls > 1
        })));
        let keys = Arc::new(Mutex::new(Vec::new()));
        let done = Arc::clone(&keys);
        bar.set_done(Some(Box::new(move |key| done.lock().push(key))));
        bar.set_autocomplete_func(Some(prefix_provider(&["abc", "abd", "abe"])));
        send(&mut bar, "a");
        let changes = record_changes(&mut bar);

        send(&mut bar, "\x1b[B");
        assert_eq!(bar.get_text(), "abd");

        send(&mut bar, "\x1b[B");
        assert!(!bar.is_autocomplete_visible());
        assert_eq!(bar.state(), DispatchState::Editing);
        assert_eq!(bar.get_text(), "a");

        send(&mut bar, "\r");
        assert_eq!(bar.get_text(), "a");
        assert_eq!(keys.lock().as_slice(), &[DoneKey::Enter]);
        assert!(changes.lock().is_empty());

        send(&mut bar, "b");
        assert_eq!(changes.lock().as_slice(), &["ab".to_string()]);
    }

    #[test]
    fn enter_reports_source_before_commit() {
        let mut bar = InputBar::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bar.set_autocompleted(Some(Box::new(move |text, index, source| {
            sink.lock().push((text.to_string(), index, source));
            false
        })));
        bar.set_autocomplete_func(Some(prefix_provider(&["abc"])));

        send(&mut bar, "a");
        send(&mut bar, "\r");
        assert_eq!(bar.get_text(), "abc");
        assert_eq!(
            seen.lock().as_slice(),
            &[("abc".to_string(), 0, AutocompletedSource::Enter)]
        );
    }

    #[test]
    fn backspace_navigates_while_suggesting() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_func(Some(prefix_provider(&["ab", "ac", "ad"])));
        send(&mut bar, "a");
        send(&mut bar, "\x7f");
        assert_eq!(bar.get_text(), "ad");
        assert!(bar.is_autocomplete_visible());
    }

    #[test]
    fn other_keys_edit_through_an_open_popup() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_func(Some(prefix_provider(&["abc"])));
        send(&mut bar, "a");
        send(&mut bar, "\x1b[D");
        send(&mut bar, "z");
        assert_eq!(bar.get_text(), "za");
        assert!(!bar.is_autocomplete_visible());
    }

    #[test]
    fn styled_candidates_are_stripped_on_commit() {
        let mut bar = InputBar::new();
        bar.set_autocomplete_list(vec![Candidate::new("\x1b[32mgreen\x1b[0m", "", 0)]);
        send(&mut bar, "\r");
        assert_eq!(bar.get_text(), "green");
    }

    #[test]
    fn click_on_popup_row_commits() {
        let mut bar = InputBar::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bar.set_autocompleted(Some(Box::new(move |_, index, source| {
            sink.lock().push((index, source));
            false
        })));
        bar.set_autocomplete_func(Some(prefix_provider(&["alpha", "amber"])));
        send(&mut bar, "a");

        let mut grid = CellGrid::new(40, 10);
        bar.draw(&mut grid, Rect::new(0, 0, 40, 1));
        let rect = bar.popup_geometry().unwrap();
        assert_eq!(rect, Rect::new(5, 1, 7, 4));

        bar.handle_event(&InputEvent::Mouse {
            raw: String::new(),
            column: rect.x + 2,
            row: rect.y + 2,
            kind: MouseKind::LeftDown,
        });
        assert_eq!(bar.get_text(), "amber");
        assert!(!bar.is_autocomplete_visible());
        assert_eq!(seen.lock().as_slice(), &[(1, AutocompletedSource::Click)]);
    }

    #[test]
    fn draws_field_border_and_popup() {
        let mut bar = InputBar::new();
        bar.set_border(true);
        bar.set_title("Go");
        bar.set_label("> ");
        bar.focus();
        bar.set_autocomplete_list(vec![Candidate::new("one", "", 0)]);
        assert_eq!(bar.height(), 3);

        let mut grid = CellGrid::new(20, 8);
        bar.draw(&mut grid, Rect::new(0, 0, 20, 3));
        assert_eq!(grid.line(0), "┌Go────────────────┐");
        assert_eq!(grid.line(1), "│>                 │");
        assert_eq!(grid.cursor(), Some(Position::new(3, 1)));

        let rect = bar.popup_geometry().unwrap();
        assert_eq!(rect, Rect::new(8, 2, 5, 3));
        assert_eq!(grid.line(3), "        │one│       ");
    }

    #[test]
    fn field_width_limits_editor() {
        let mut bar = InputBar::new();
        bar.set_label("ab");
        bar.set_field_width(3);
        bar.set_text("123456");

        let mut grid = CellGrid::new(10, 1);
        bar.draw(&mut grid, Rect::new(0, 0, 10, 1));
        assert_eq!(grid.line(0), "ab56      ");
    }

    #[test]
    fn set_text_does_not_notify_or_refresh() {
        let mut bar = InputBar::new();
        let changes = record_changes(&mut bar);
        bar.set_autocomplete_func(Some(prefix_provider(&["abc"])));
        bar.set_text("ab");
        assert_eq!(bar.get_text(), "ab");
        assert!(!bar.is_autocomplete_visible());
        assert!(changes.lock().is_empty());

        bar.autocomplete();
        assert!(bar.is_autocomplete_visible());
    }

    #[test]
    fn accept_filter_drops_rejected_characters() {
        let mut bar = InputBar::new();
        let changes = record_changes(&mut bar);
        bar.set_accept(Some(Box::new(|_, ch| ch.is_ascii_digit())));
        send(&mut bar, "1");
        send(&mut bar, "x");
        assert_eq!(bar.get_text(), "1");
        assert_eq!(changes.lock().as_slice(), &["1".to_string()]);
    }

    #[test]
    fn focus_is_delegated_to_editor() {
        let mut bar = InputBar::new();
        assert!(!bar.has_focus());
        bar.focus();
        assert!(bar.has_focus());
        bar.blur();
        assert!(!bar.has_focus());
    }
}
