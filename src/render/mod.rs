//! Drawing surfaces.

pub mod grid;

pub use grid::{Cell, CellGrid};
