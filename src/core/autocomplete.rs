//! Autocomplete candidates, ranking and popup state.
//!
//! [`AutocompleteCoordinator`] owns the ranked candidate list and the popup list that displays
//! it. The popup state (list contents, visibility, last drawn geometry) sits behind a single
//! lock so a redraw from another context always sees a consistent snapshot. The provider is
//! never called with that lock held.
//!
//! Callback slots are `Send` but not `Sync`, so the coordinator (and the widgets that own one)
//! can move between threads but cannot be shared by reference. A host that repaints from a
//! second thread keeps the widget behind its own lock, e.g. `Arc<parking_lot::Mutex<InputBar>>`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::geometry::{Position, Rect};
use crate::core::input_event::InputEvent;
use crate::core::list_component::SelectableList;
use crate::core::popup_layout::{layout_popup, PopupLayoutOptions};
use crate::core::screen::Screen;
use crate::core::text::ansi::strip_ansi;

/// One suggestion offered by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Text placed into the field when the candidate is chosen.
    pub value: String,
    /// Secondary text shown next to the value in the popup.
    pub description: String,
    /// Higher priorities are listed first.
    pub priority: i32,
}

impl Candidate {
    pub fn new(value: impl Into<String>, description: impl Into<String>, priority: i32) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
            priority,
        }
    }
}

/// What caused a candidate to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompletedSource {
    /// The highlight moved with the keyboard.
    Navigate,
    /// A popup row was clicked.
    Click,
    /// Enter was pressed on the highlighted row.
    Enter,
}

/// Candidate provider, called with the full text and the cursor row.
pub type AutocompleteFunc = Box<dyn FnMut(&str, usize) -> Vec<Candidate> + Send>;

/// Sorts by priority, highest first. Candidates with equal priority keep their input order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // `sort_by` is stable.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates
}

/// Notification raised by the popup list while it handles input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSignal {
    SelectionChanged { index: usize, value: String },
    Activated { index: usize, value: String },
}

struct PopupState<L> {
    list: L,
    candidates: Vec<Candidate>,
    present: bool,
    geometry: Rect,
}

impl<L: SelectableList> PopupState<L> {
    fn is_open(&self) -> bool {
        self.present && !self.candidates.is_empty()
    }
}

pub struct AutocompleteCoordinator<L: SelectableList> {
    provider: Option<AutocompleteFunc>,
    popup: Mutex<PopupState<L>>,
    signals: Arc<Mutex<Vec<ListSignal>>>,
}

impl<L: SelectableList> AutocompleteCoordinator<L> {
    pub fn new(mut list: L) -> Self {
        let signals: Arc<Mutex<Vec<ListSignal>>> = Arc::new(Mutex::new(Vec::new()));

        let changed = Arc::clone(&signals);
        list.set_on_selection_change(Some(Box::new(move |index, primary, _| {
            changed.lock().push(ListSignal::SelectionChanged {
                index,
                value: strip_ansi(primary),
            });
        })));

        let activated = Arc::clone(&signals);
        list.set_on_item_activated(Some(Box::new(move |index, primary, _| {
            activated.lock().push(ListSignal::Activated {
                index,
                value: strip_ansi(primary),
            });
        })));

        Self {
            provider: None,
            popup: Mutex::new(PopupState {
                list,
                candidates: Vec::new(),
                present: false,
                geometry: Rect::default(),
            }),
            signals,
        }
    }

    pub fn set_provider(&mut self, provider: Option<AutocompleteFunc>) {
        self.provider = provider;
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Recomputes the candidates for `text` and returns how many are shown.
    ///
    /// Without a provider the current list is left untouched. Empty text, or a provider that
    /// returns nothing, closes the popup.
    pub fn refresh(&mut self, text: &str, cursor_row: usize) -> usize {
        let Some(provider) = self.provider.as_mut() else {
            return self.visible_count();
        };

        if text.is_empty() {
            self.clear();
            return 0;
        }

        let items = provider(text, cursor_row);
        tracing::debug!(
            target: "inputbar::autocomplete",
            text_len = text.len(),
            cursor_row,
            candidates = items.len(),
            "provider returned"
        );
        self.set_candidates(items)
    }

    /// Ranks `items` and shows them, bypassing the provider. Returns how many are shown.
    pub fn set_candidates(&self, items: Vec<Candidate>) -> usize {
        let ranked = rank_candidates(items);

        let mut state = self.popup.lock();
        let state = &mut *state;
        state.list.clear();
        for candidate in &ranked {
            state
                .list
                .add_item(&candidate.value, &candidate.description, None, None);
        }
        state.present = !ranked.is_empty();
        if state.present {
            tracing::debug!(target: "inputbar::autocomplete", candidates = ranked.len(), "popup opened");
        } else {
            state.geometry = Rect::default();
        }
        state.candidates = ranked;
        state.candidates.len()
    }

    /// Closes the popup. The list stays allocated and is refilled by the next refresh.
    pub fn dismiss(&self) {
        let mut state = self.popup.lock();
        if state.present {
            tracing::debug!(target: "inputbar::autocomplete", "popup dismissed");
        }
        state.present = false;
        state.geometry = Rect::default();
    }

    /// Drops every candidate and closes the popup.
    pub fn clear(&self) {
        let mut state = self.popup.lock();
        state.list.clear();
        state.candidates.clear();
        state.present = false;
        state.geometry = Rect::default();
    }

    pub fn is_visible(&self) -> bool {
        self.popup.lock().is_open()
    }

    fn visible_count(&self) -> usize {
        let state = self.popup.lock();
        if state.is_open() {
            state.candidates.len()
        } else {
            0
        }
    }

    /// Snapshot of the ranked candidates currently held.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.popup.lock().candidates.clone()
    }

    /// The highlighted candidate as `(index, value)` with styling removed.
    pub fn current(&self) -> Option<(usize, String)> {
        let state = self.popup.lock();
        if !state.is_open() {
            return None;
        }
        let index = state.list.current_item();
        let (primary, _) = state.list.item_text(index)?;
        Some((index, strip_ansi(primary)))
    }

    /// Forwards a navigation event to the popup list and returns what it signalled.
    pub fn navigate(&self, event: &InputEvent) -> Vec<ListSignal> {
        {
            let mut state = self.popup.lock();
            if !state.is_open() {
                return Vec::new();
            }
            state.list.handle_event(event);
        }
        self.take_signals()
    }

    /// Activates the popup row under `position`, if any.
    pub fn click(&self, position: Position) -> Vec<ListSignal> {
        {
            let mut state = self.popup.lock();
            if !state.is_open() || !state.geometry.contains(position) {
                return Vec::new();
            }
            let Some(index) = state.list.item_at(position) else {
                return Vec::new();
            };
            state.list.set_current_item(index);
            state.list.activate(index);
        }
        self.take_signals()
    }

    /// Whether `position` falls inside the popup as last drawn.
    pub fn hit_test(&self, position: Position) -> bool {
        let state = self.popup.lock();
        state.is_open() && state.geometry.contains(position)
    }

    fn take_signals(&self) -> Vec<ListSignal> {
        std::mem::take(&mut *self.signals.lock())
    }

    /// Rectangle computed by the most recent draw, if the popup was drawn.
    pub fn geometry(&self) -> Option<Rect> {
        let state = self.popup.lock();
        if state.is_open() && !state.geometry.is_empty() {
            Some(state.geometry)
        } else {
            None
        }
    }

    /// Lays out and paints the popup. The lock is held for the whole pass.
    pub fn draw(
        &self,
        screen: &mut dyn Screen,
        anchor: Position,
        label_width: usize,
        options: &PopupLayoutOptions,
    ) {
        let mut state = self.popup.lock();
        let state = &mut *state;
        if !state.is_open() {
            state.geometry = Rect::default();
            return;
        }

        let options = PopupLayoutOptions {
            min_width: options.min_width.max(state.list.min_width()),
            ..*options
        };
        let (screen_width, screen_height) = screen.size();
        let rect = layout_popup(
            anchor,
            label_width,
            &state.candidates,
            screen_width,
            screen_height,
            &options,
        );
        state.geometry = rect;
        if rect.is_empty() {
            return;
        }

        state.list.set_rect(rect);
        state.list.draw(screen, rect);
    }
}
