//! Key parsing for legacy terminal input.
//!
//! Raw byte sequences are normalized to key ids such as `"up"`, `"shift+tab"`, `"ctrl+w"` or
//! `"alt+b"`. Keybindings are expressed in the same ids.

fn legacy_sequence_key_id(data: &str) -> Option<&'static str> {
    match data {
        "\x1b[A" | "\x1bOA" => Some("up"),
        "\x1b[B" | "\x1bOB" => Some("down"),
        "\x1b[C" | "\x1bOC" => Some("right"),
        "\x1b[D" | "\x1bOD" => Some("left"),
        "\x1b[H" | "\x1bOH" | "\x1b[1~" | "\x1b[7~" => Some("home"),
        "\x1b[F" | "\x1bOF" | "\x1b[4~" | "\x1b[8~" => Some("end"),
        "\x1b[2~" => Some("insert"),
        "\x1b[3~" => Some("delete"),
        "\x1b[5~" | "\x1b[[5~" => Some("pageUp"),
        "\x1b[6~" | "\x1b[[6~" => Some("pageDown"),
        "\x1b[Z" => Some("shift+tab"),
        "\x1b[1;5C" | "\x1bOc" => Some("ctrl+right"),
        "\x1b[1;5D" | "\x1bOd" => Some("ctrl+left"),
        "\x1b[1;3C" | "\x1bf" | "\x1bF" => Some("alt+right"),
        "\x1b[1;3D" | "\x1bb" | "\x1bB" => Some("alt+left"),
        "\x1b[3;3~" | "\x1bd" => Some("alt+delete"),
        "\x1bOM" => Some("enter"),
        _ => None,
    }
}

/// Returns the normalized key id for a raw input chunk, or `None` when it is not a key.
pub fn parse_key(data: &str) -> Option<String> {
    if let Some(key_id) = legacy_sequence_key_id(data) {
        return Some(key_id.to_string());
    }

    match data {
        "\x1b" => return Some("escape".to_string()),
        "\t" => return Some("tab".to_string()),
        "\r" | "\n" => return Some("enter".to_string()),
        "\x7f" | "\x08" => return Some("backspace".to_string()),
        "\x1b\x7f" | "\x1b\x08" => return Some("alt+backspace".to_string()),
        "\x00" => return Some("ctrl+space".to_string()),
        " " => return Some("space".to_string()),
        _ => {}
    }

    let bytes = data.as_bytes();
    if bytes.len() == 2 && bytes[0] == 0x1b {
        let code = bytes[1];
        if (97..=122).contains(&code) {
            return Some(format!("alt+{}", code as char));
        }
    }

    if bytes.len() == 1 {
        let code = bytes[0];
        if (1..=26).contains(&code) {
            return Some(format!("ctrl+{}", (code + 96) as char));
        }
        if (32..=126).contains(&code) {
            return Some(data.to_string());
        }
    }

    None
}

/// Returns the printable text carried by `data`, or `None` for control input.
pub fn parse_text(data: &str) -> Option<String> {
    if data.is_empty() || data.starts_with('\x1b') {
        return None;
    }
    if data.chars().any(char::is_control) {
        return None;
    }
    Some(data.to_string())
}

/// Whether the raw chunk matches the given key id.
pub fn matches_key(data: &str, key_id: &str) -> bool {
    parse_key(data).is_some_and(|parsed| parsed == key_id)
}
