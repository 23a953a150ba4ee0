//! Display-column measurement.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

const TAB_WIDTH: usize = 3;

/// Columns occupied by a single grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }
    if emoji_get(grapheme).is_some() {
        return 2;
    }

    grapheme
        .chars()
        .map(|ch| {
            if ch == '\t' {
                TAB_WIDTH
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(0)
            }
        })
        .sum()
}

/// Columns occupied by `input` on screen, ignoring escape sequences.
pub fn visible_width(input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }
    strip_ansi(input).graphemes(true).map(grapheme_width).sum()
}
