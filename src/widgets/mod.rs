//! Concrete widgets.

pub mod r#box;
pub mod input_bar;
pub mod select_list;
pub mod text_area;

pub use input_bar::{
    AutocompletedFunc, ChangedFunc, DispatchState, DoneFunc, DoneKey, InputBar,
};
pub use r#box::Box;
pub use select_list::{SelectList, SelectListTheme};
pub use text_area::TextArea;
