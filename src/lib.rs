//! Single-line terminal input bar with an autocomplete popup.
//!
//! # Public API Overview
//! - [`InputBar`] is the widget: a labelled text field that asks a provider for [`Candidate`]s
//!   on every edit and shows them, ranked by priority, in a popup next to the field.
//! - Drawing targets any [`Screen`]; [`CellGrid`] is an in-memory implementation.
//! - Input arrives as [`InputEvent`]s, parsed from raw terminal bytes by
//!   [`parse_input_events`].
//! - [`layout_popup`] is the pure geometry used to place the popup.
//! - [`EnvConfig`] and [`logging::init`] cover environment configuration and file logging.

pub mod config;
pub mod logging;

pub mod core;
pub mod render;
pub mod widgets;

pub use crate::config::{ConfigError, EnvConfig};
pub use crate::logging::LoggingError;

/// Candidates, ranking and popup state.
pub use crate::core::autocomplete::{
    rank_candidates, AutocompleteCoordinator, AutocompleteFunc, AutocompletedSource, Candidate,
};
/// Popup geometry.
pub use crate::core::popup_layout::{layout_popup, PopupLayoutOptions};

/// Built-in widgets.
pub use crate::widgets::{
    AutocompletedFunc, Box, ChangedFunc, DispatchState, DoneFunc, DoneKey, InputBar, SelectList,
    SelectListTheme, TextArea,
};

/// Collaborator contracts.
pub use crate::core::component::{Component, Focusable};
pub use crate::core::editor_component::{AcceptFunc, TextEditor};
pub use crate::core::list_component::SelectableList;

/// Geometry and drawing surfaces.
pub use crate::core::geometry::{Position, Rect};
pub use crate::core::screen::Screen;
pub use crate::render::{Cell, CellGrid};

/// Keyboard and mouse input.
pub use crate::core::input::{matches_key, parse_key};
pub use crate::core::input_event::{parse_input_events, InputEvent, MouseKind};

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{
    default_keybindings_handle, EditorAction, KeyBinding, KeybindingsConfig, KeybindingsHandle,
    KeybindingsManager, DEFAULT_KEYBINDINGS,
};

/// ANSI-aware text helpers.
pub use crate::core::text::ansi::strip_ansi;
pub use crate::core::text::utils::truncate_to_width;
pub use crate::core::text::width::visible_width;
