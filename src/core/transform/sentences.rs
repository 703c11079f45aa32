//! One sentence per line.

use super::whitespace::{collapse_spaces, join_lines};
use super::{Operation, TransformError, Transformed};

/// Sentence boundaries and their line-breaking replacement, applied in order.
const SENTENCE_BREAKS: [(&str, &str); 3] = [(". ", ".\n"), (": ", ":\n"), ("; ", ";\n")];

fn break_sentences(text: &str, remove_redundant_space: bool) -> Result<String, TransformError> {
    let mut out = join_lines(text);
    for (boundary, replacement) in SENTENCE_BREAKS {
        out = out.replace(boundary, replacement);
    }
    if remove_redundant_space {
        out = collapse_spaces(&out, false)?;
    }
    Ok(out)
}

/// Drop existing newlines and start a new line after every `.`, `:` or `;`
/// that is followed by a space.
pub fn limit_newlines_to_sentences(text: &str, remove_redundant_space: bool) -> Transformed {
    Transformed::finish(
        Operation::LimitNewlinesToSentences,
        "Insert newline after sentences, remove all others",
        break_sentences(text, remove_redundant_space),
    )
}
