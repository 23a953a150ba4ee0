//! In-memory cell grid.
//!
//! Keeps one symbol and the active SGR style per cell. Hosts copy it to the terminal; tests
//! read it back with [`CellGrid::line`] and [`CellGrid::cell`].

use crate::core::geometry::{Position, Rect};
use crate::core::screen::Screen;
use crate::core::text::ansi::extract_ansi_code;
use crate::core::text::utils::grapheme_segments;
use crate::core::text::width::grapheme_width;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Grapheme drawn in the cell. Empty for the trailing half of a wide grapheme.
    pub symbol: String,
    /// Concatenated SGR sequences in effect; empty means the default style.
    pub style: String,
}

impl Cell {
    fn blank() -> Self {
        Self {
            symbol: " ".to_string(),
            style: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    cursor: Option<Position>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width * height],
            cursor: None,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
        self.cursor = None;
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }

    /// Row `y` as plain text, without styling.
    pub fn line(&self, y: usize) -> String {
        if y >= self.height {
            return String::new();
        }
        self.cells[y * self.width..(y + 1) * self.width]
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }
}

fn next_escape_or_end(text: &str, from: usize) -> usize {
    text[from..]
        .find('\x1b')
        .map_or(text.len(), |offset| from + offset)
}

impl Screen for CellGrid {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str, max_width: usize) -> usize {
        if y >= self.height || x >= self.width {
            return 0;
        }
        let limit = max_width.min(self.width - x);

        let mut style = String::new();
        let mut written = 0;
        let mut idx = 0;
        'scan: while idx < text.len() {
            if let Some(ansi) = extract_ansi_code(text, idx) {
                if ansi.is_sgr_reset() {
                    style.clear();
                } else if ansi.is_sgr() {
                    style.push_str(&ansi.code);
                }
                idx += ansi.length;
                continue;
            }

            let run_end = match next_escape_or_end(text, idx) {
                // Lone ESC without a complete sequence.
                end if end == idx => idx + 1,
                end => end,
            };
            for grapheme in grapheme_segments(&text[idx..run_end]) {
                if grapheme == "\x1b" {
                    continue;
                }
                let width = grapheme_width(grapheme);
                if width == 0 {
                    continue;
                }
                if written + width > limit {
                    break 'scan;
                }
                let column = x + written;
                if let Some(cell) = self.cell_mut(column, y) {
                    cell.symbol = grapheme.to_string();
                    cell.style = style.clone();
                }
                for continuation in 1..width {
                    if let Some(cell) = self.cell_mut(column + continuation, y) {
                        cell.symbol = String::new();
                        cell.style = style.clone();
                    }
                }
                written += width;
            }
            idx = run_end;
        }
        written
    }

    fn fill(&mut self, area: Rect, ch: char) {
        let area = area.intersection(self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.symbol = ch.to_string();
                    cell.style.clear();
                }
            }
        }
    }

    fn set_cursor(&mut self, position: Option<Position>) {
        self.cursor = position.filter(|pos| pos.x < self.width && pos.y < self.height);
    }
}
