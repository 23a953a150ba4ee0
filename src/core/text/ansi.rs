//! ANSI escape sequence scanning.
//!
//! Candidate values and labels may carry styling as raw escape sequences. Everything that
//! measures or stores text goes through these helpers so styling never counts as width and
//! never leaks into the editable buffer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCodeKind {
    Csi,
    Osc,
    Apc,
    Dcs,
    Ss3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode {
    pub code: String,
    pub length: usize,
    pub kind: AnsiCodeKind,
}

impl AnsiCode {
    /// Select Graphic Rendition (`ESC [ ... m`), the only kind that changes cell styling.
    pub fn is_sgr(&self) -> bool {
        self.kind == AnsiCodeKind::Csi && self.code.ends_with('m')
    }

    /// `ESC [ m` and `ESC [ 0 m` both reset every attribute.
    pub fn is_sgr_reset(&self) -> bool {
        matches!(self.code.as_str(), "\x1b[m" | "\x1b[0m")
    }
}

/// Returns the escape sequence starting at byte `pos`, if there is a complete one.
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&0x1b) {
        return None;
    }

    let (kind, end) = match bytes.get(pos + 1)? {
        b'[' => (AnsiCodeKind::Csi, csi_end(bytes, pos + 2)?),
        b']' => (AnsiCodeKind::Osc, string_terminator_end(bytes, pos + 2)?),
        b'_' => (AnsiCodeKind::Apc, string_terminator_end(bytes, pos + 2)?),
        b'P' => (AnsiCodeKind::Dcs, string_terminator_end(bytes, pos + 2)?),
        b'O' if pos + 2 < bytes.len() => (AnsiCodeKind::Ss3, pos + 3),
        _ => return None,
    };

    let code = input.get(pos..end)?.to_string();
    Some(AnsiCode {
        length: end - pos,
        code,
        kind,
    })
}

fn csi_end(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map(|offset| start + offset + 1)
}

fn string_terminator_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut idx = start;
    while idx < bytes.len() {
        if bytes[idx] == 0x07 {
            return Some(idx + 1);
        }
        if bytes[idx] == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
            return Some(idx + 2);
        }
        idx += 1;
    }
    None
}

/// Removes every complete escape sequence, keeping the visible text.
pub fn strip_ansi(input: &str) -> String {
    if !input.contains('\x1b') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(ansi) = extract_ansi_code(input, idx) {
            idx += ansi.length;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        out.push(ch);
        idx += ch.len_utf8();
    }
    out
}
