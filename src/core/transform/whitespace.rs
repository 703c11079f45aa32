//! Newline and space clean-up.

use std::sync::OnceLock;

use regex::Regex;

use super::{Operation, TransformError, Transformed};

type Pattern = OnceLock<Result<Regex, regex::Error>>;

/// Two or more spaces right after a visible character.
static SPACES_AFTER_TEXT: Pattern = OnceLock::new();
/// Any run of two or more spaces.
static SPACE_RUNS: Pattern = OnceLock::new();
/// Spaces and tabs at the start of a line.
static LINE_INDENT: Pattern = OnceLock::new();

fn compiled(cell: &'static Pattern, pattern: &str) -> Result<&'static Regex, TransformError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| TransformError::Pattern(e.clone()))
}

/// Replace every newline with a single space.
pub(super) fn join_lines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Collapse redundant spaces.
///
/// With `keep_indent`, only runs that follow a visible character shrink to one
/// space, so leading indentation (and anything after a tab) is left alone.
/// Without it, every run shrinks and then leading spaces and tabs are stripped
/// from each line.
pub(super) fn collapse_spaces(text: &str, keep_indent: bool) -> Result<String, TransformError> {
    if keep_indent {
        let re = compiled(&SPACES_AFTER_TEXT, r"(\S) {2,}")?;
        return Ok(re.replace_all(text, "${1} ").into_owned());
    }
    let runs = compiled(&SPACE_RUNS, r" {2,}")?;
    let indent = compiled(&LINE_INDENT, r"(?m)^[ \t]+")?;
    let collapsed = runs.replace_all(text, " ");
    Ok(indent.replace_all(&collapsed, "").into_owned())
}

/// Replace all newlines with spaces.
pub fn remove_newlines(text: &str) -> Transformed {
    Transformed::finish(
        Operation::RemoveNewlines,
        "Replace all newlines with a space",
        Ok(join_lines(text)),
    )
}

/// Remove recurring spaces, optionally keeping the indentation of each line.
pub fn remove_redundant_space(text: &str, keep_indent: bool) -> Transformed {
    Transformed::finish(
        Operation::RemoveRedundantSpace,
        "Remove all recurrent spaces and tabs except at the start of a line",
        collapse_spaces(text, keep_indent),
    )
}

/// Flatten text to a single line without redundant spaces.
pub fn one_liner(text: &str) -> Transformed {
    Transformed::finish(
        Operation::OneLiner,
        "Remove all newlines and redundant spaces",
        collapse_spaces(&join_lines(text), false),
    )
}
