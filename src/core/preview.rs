//! Display previews of transformed text.

/// Default preview width, in characters, of a launcher item title.
pub const DEFAULT_PREVIEW_CHARS: usize = 75;

/// Marker appended to a preview that was cut short.
const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_chars` characters for a single-row preview.
///
/// Longer text is cut at `max_chars` and gets a trailing `...`. Anything that
/// fits is returned with its trailing newlines removed.
pub fn shorten(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.trim_end_matches('\n').to_string(),
    }
}
