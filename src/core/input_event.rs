//! Structured input events delivered to widgets.

use crate::core::input::{parse_key, parse_text};

/// Mouse action decoded from an SGR mouse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    LeftDown,
    LeftUp,
    MiddleDown,
    RightDown,
    ScrollUp,
    ScrollDown,
    Moved,
    Other,
}

/// Input event delivered to components.
///
/// Notes:
/// - `raw` is the exact byte sequence received from the terminal (UTF-8 decoded).
/// - `key_id` is a normalized identifier for matching keybindings.
/// - Text and paste events carry decoded text so widgets don't have to parse escape sequences.
/// - Mouse coordinates are zero-based cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        raw: String,
        key_id: String,
    },
    Text {
        raw: String,
        text: String,
    },
    Paste {
        raw: String,
        text: String,
    },
    Mouse {
        raw: String,
        column: usize,
        row: usize,
        kind: MouseKind,
    },
    Resize {
        columns: u16,
        rows: u16,
    },
    UnknownRaw {
        raw: String,
    },
}

impl InputEvent {
    /// Builds a key event from a key id, for hosts that decode input themselves.
    pub fn key(key_id: impl Into<String>) -> Self {
        let key_id = key_id.into();
        InputEvent::Key {
            raw: String::new(),
            key_id,
        }
    }

    /// Builds a text event, for hosts that decode input themselves.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        InputEvent::Text {
            raw: text.clone(),
            text,
        }
    }

    pub fn key_id(&self) -> Option<&str> {
        match self {
            InputEvent::Key { key_id, .. } => Some(key_id.as_str()),
            _ => None,
        }
    }
}

const PASTE_START: &str = "\x1b[200~";
const PASTE_END: &str = "\x1b[201~";
const SGR_MOUSE_PREFIX: &str = "\x1b[<";

fn parse_sgr_mouse(data: &str) -> Option<InputEvent> {
    let body = data.strip_prefix(SGR_MOUSE_PREFIX)?;
    let (params, pressed) = if let Some(params) = body.strip_suffix('M') {
        (params, true)
    } else {
        (body.strip_suffix('m')?, false)
    };

    let mut parts = params.split(';').map(|part| part.parse::<usize>().ok());
    let button = parts.next()??;
    let column = parts.next()??;
    let row = parts.next()??;
    if parts.next().is_some() {
        return None;
    }

    let kind = match (button, pressed) {
        (64, _) => MouseKind::ScrollUp,
        (65, _) => MouseKind::ScrollDown,
        (b, _) if b & 32 != 0 => MouseKind::Moved,
        (0, true) => MouseKind::LeftDown,
        (0, false) => MouseKind::LeftUp,
        (1, true) => MouseKind::MiddleDown,
        (2, true) => MouseKind::RightDown,
        _ => MouseKind::Other,
    };

    Some(InputEvent::Mouse {
        raw: data.to_string(),
        column: column.saturating_sub(1),
        row: row.saturating_sub(1),
        kind,
    })
}

fn parse_non_paste(data: &str) -> Vec<InputEvent> {
    if data.is_empty() {
        return Vec::new();
    }

    if data.starts_with(SGR_MOUSE_PREFIX) {
        if let Some(event) = parse_sgr_mouse(data) {
            return vec![event];
        }
    }

    if let Some(text) = parse_text(data) {
        return vec![InputEvent::Text {
            raw: data.to_string(),
            text,
        }];
    }

    if let Some(key_id) = parse_key(data) {
        return vec![InputEvent::Key {
            raw: data.to_string(),
            key_id,
        }];
    }

    vec![InputEvent::UnknownRaw {
        raw: data.to_string(),
    }]
}

/// Splits one chunk of terminal input into events.
///
/// Bracketed paste segments become [`InputEvent::Paste`]; the text around them is parsed as a
/// single key, text or mouse event each.
pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut remaining = data;
    while !remaining.is_empty() {
        let Some(start) = remaining.find(PASTE_START) else {
            events.extend(parse_non_paste(remaining));
            break;
        };

        events.extend(parse_non_paste(&remaining[..start]));

        let after_start = &remaining[start + PASTE_START.len()..];
        let Some(end_rel) = after_start.find(PASTE_END) else {
            events.push(InputEvent::UnknownRaw {
                raw: remaining[start..].to_string(),
            });
            break;
        };

        let raw_end = start + PASTE_START.len() + end_rel + PASTE_END.len();
        events.push(InputEvent::Paste {
            raw: remaining[start..raw_end].to_string(),
            text: after_start[..end_rel].to_string(),
        });
        remaining = &after_start[end_rel + PASTE_END.len()..];
    }
    events
}
