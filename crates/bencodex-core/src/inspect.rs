//! Debug-only text rendering. Not parseable back into values.

use std::fmt::Write;

pub(crate) fn quote_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(crate) fn quote_binary(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 3);
    out.push_str("b\"");
    for b in bytes {
        let _ = write!(out, "\\x{:02x}", b);
    }
    out.push('"');
    out
}

/// Push `item` onto `out` indented by two spaces, re-indenting continuation
/// lines of multi-line inspections.
pub(crate) fn push_indented(out: &mut String, item: &str) {
    for (i, line) in item.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("  ");
        out.push_str(line);
    }
}
