//! Core interfaces and types.

pub mod autocomplete;
pub mod component;
pub mod editor_component;
pub mod geometry;
pub mod input;
pub mod input_event;
pub mod keybindings;
pub mod list_component;
pub mod popup_layout;
pub mod screen;
pub mod text;
