//! Grapheme classification and width-bounded truncation.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::extract_ansi_code;
use super::width::{grapheme_width, visible_width};

const ANSI_RESET: &str = "\x1b[0m";

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

pub fn is_whitespace_char(ch: char) -> bool {
    ch.is_whitespace()
}

pub fn is_punctuation_char(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '<'
            | '>'
            | '.'
            | ','
            | ';'
            | ':'
            | '\''
            | '"'
            | '!'
            | '?'
            | '+'
            | '-'
            | '='
            | '*'
            | '/'
            | '\\'
            | '|'
            | '&'
            | '%'
            | '^'
            | '$'
            | '#'
            | '@'
            | '~'
            | '`'
    )
}

/// Collapses line breaks into single spaces so a value fits on one row.
pub fn normalize_to_single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            if !last_was_break {
                out.push(' ');
            }
            last_was_break = true;
        } else {
            out.push(ch);
            last_was_break = false;
        }
    }
    out
}

/// Cuts `text` to at most `max_width` columns, keeping escape sequences intact.
///
/// When the text is cut, a reset is emitted before `ellipsis` so styling does not bleed.
/// With `pad`, the result is right-padded with spaces to exactly `max_width` columns.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = visible_width(text);
    if text_width <= max_width {
        if pad {
            return format!("{text}{}", " ".repeat(max_width - text_width));
        }
        return text.to_string();
    }

    let target_width = max_width.saturating_sub(visible_width(ellipsis));
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    let mut idx = 0;
    'scan: while idx < text.len() {
        if let Some(ansi) = extract_ansi_code(text, idx) {
            truncated.push_str(&ansi.code);
            idx += ansi.length;
            continue;
        }

        let run_end = next_ansi_or_end(text, idx);
        for grapheme in grapheme_segments(&text[idx..run_end]) {
            let width = grapheme_width(grapheme);
            if current_width + width > target_width {
                break 'scan;
            }
            truncated.push_str(grapheme);
            current_width += width;
        }
        idx = run_end;
    }

    truncated.push_str(ANSI_RESET);
    truncated.push_str(ellipsis);

    if pad {
        let result_width = visible_width(&truncated);
        if result_width < max_width {
            truncated.push_str(&" ".repeat(max_width - result_width));
        }
    }

    truncated
}

fn next_ansi_or_end(input: &str, mut idx: usize) -> usize {
    while idx < input.len() {
        if input.as_bytes()[idx] == 0x1b && extract_ansi_code(input, idx).is_some() {
            break;
        }
        match input[idx..].chars().next() {
            Some(ch) => idx += ch.len_utf8(),
            None => break,
        }
    }
    idx
}
