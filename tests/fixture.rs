#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {name}: {err}"))
}

/// Decodes `\n`, `\r`, `\t`, `\\` and `\xHH` escapes used in fixture columns.
pub fn unescape(input: &str) -> String {
    let mut out = String::new();
    let mut iter = input.chars().peekable();

    while let Some(ch) = iter.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match iter.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('x') => {
                let hi = iter.next();
                let lo = iter.next();
                match (hi.and_then(|h| h.to_digit(16)), lo.and_then(|l| l.to_digit(16))) {
                    (Some(h), Some(l)) => out.push(((h << 4) | l) as u8 as char),
                    _ => {
                        out.push('\\');
                        out.push('x');
                        out.extend(hi);
                        out.extend(lo);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Splits a fixture into `(line_number, columns)` rows, skipping blanks and `#` comments.
pub fn rows(raw: &str) -> Vec<(usize, Vec<&str>)> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(num, line)| (num, line.split('\t').collect()))
        .collect()
}
