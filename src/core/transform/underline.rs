//! Underline every line of a text with a repeated character.

use super::{Operation, Transformed};
use crate::core::preview::{DEFAULT_PREVIEW_CHARS, shorten};

/// Room left in the title for the `char*4` decorations on both sides.
const TITLE_PREVIEW_CHARS: usize = DEFAULT_PREVIEW_CHARS - 10;

/// Whether `c` ends a line: newline, carriage return, vertical tab, form
/// feed, the ASCII separators, NEL and the Unicode line/paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line break, with `\r\n` counted once. Terminators are
/// dropped and a trailing break does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, n)| n == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Underline each line with `ch`, keeping its indentation.
///
/// `"  World"` becomes `"  World\n  -----\n"`. Every line, including the last,
/// is followed by its underline and a newline. Cannot fail.
pub fn underline(text: &str, ch: char) -> Transformed {
    let mut out = String::with_capacity(text.len() * 2 + 2);
    for line in split_lines(text) {
        let visible = line.trim_start_matches(' ').chars().count();
        let indent = line.chars().count() - visible;
        out.push_str(line);
        out.push('\n');
        out.extend(std::iter::repeat_n(' ', indent));
        out.extend(std::iter::repeat_n(ch, visible));
        out.push('\n');
    }

    let fence: String = std::iter::repeat_n(ch, 4).collect();
    let title = format!(
        "{} {} {}",
        fence,
        shorten(text, TITLE_PREVIEW_CHARS),
        fence
    );
    Transformed::titled(
        Operation::Underline,
        format!("Underline with {}", ch),
        title,
        out,
    )
}
