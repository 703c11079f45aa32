//! Text transformers: underline, newline removal, space collapsing,
//! sentence line breaks and one-liners.
//!
//! Every transformer returns a [`Transformed`], which the caller turns into
//! either plain text or a launcher [`Item`].

mod sentences;
mod underline;
mod whitespace;

pub use sentences::limit_newlines_to_sentences;
pub use underline::underline;
pub use whitespace::{one_liner, remove_newlines, remove_redundant_space};

use crate::core::config::DEFAULT_UNDERLINE_CHAR;
use crate::core::item::Item;
use crate::core::preview::{DEFAULT_PREVIEW_CHARS, shorten};

/// Failure of a transformer. Reported through [`Transformed`], never raised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The available transformations. `uid` is the stable name the launcher
/// uses to remember and rank selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Underline,
    RemoveNewlines,
    RemoveRedundantSpace,
    LimitNewlinesToSentences,
    OneLiner,
}

impl Operation {
    /// All operations, in the order they are listed to the user.
    pub const ALL: [Operation; 5] = [
        Operation::Underline,
        Operation::RemoveNewlines,
        Operation::RemoveRedundantSpace,
        Operation::LimitNewlinesToSentences,
        Operation::OneLiner,
    ];

    pub const fn uid(self) -> &'static str {
        match self {
            Operation::Underline => "underline",
            Operation::RemoveNewlines => "remove_newlines",
            Operation::RemoveRedundantSpace => "remove_redundant_space",
            Operation::LimitNewlinesToSentences => "limit_newlines_to_sentences",
            Operation::OneLiner => "one_liner",
        }
    }

    /// Title shown in place of a preview when the transformation failed.
    pub const fn fallback_title(self) -> &'static str {
        match self {
            Operation::Underline => "Underline",
            Operation::RemoveNewlines => "Remove all newlines",
            // Same label for both indentation modes.
            Operation::RemoveRedundantSpace => "Remove redundant spaces but keep indentation",
            Operation::LimitNewlinesToSentences => "Newlines after .:; only",
            Operation::OneLiner => "Clean one-liner, no redundant spaces",
        }
    }

    /// Run this operation on `text` with the relevant fields of `options`.
    pub fn run(self, text: &str, options: &Options) -> Transformed {
        match self {
            Operation::Underline => underline(text, options.underline_char),
            Operation::RemoveNewlines => remove_newlines(text),
            Operation::RemoveRedundantSpace => remove_redundant_space(text, options.keep_indent),
            Operation::LimitNewlinesToSentences => {
                limit_newlines_to_sentences(text, options.remove_redundant_space)
            }
            Operation::OneLiner => one_liner(text),
        }
    }
}

/// Optional parameters of the transformers. Each operation reads only its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub underline_char: char,
    pub keep_indent: bool,
    pub remove_redundant_space: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            underline_char: DEFAULT_UNDERLINE_CHAR,
            keep_indent: true,
            remove_redundant_space: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Output {
    title: String,
    text: String,
}

/// Outcome of one transformer call: the operation, its subtitle, and either
/// the transformed text with its preview title or the error.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformed {
    operation: Operation,
    subtitle: String,
    outcome: Result<Output, TransformError>,
}

impl Transformed {
    /// Wrap a transformer result; the title is a preview of the output.
    fn finish(
        operation: Operation,
        subtitle: impl Into<String>,
        result: Result<String, TransformError>,
    ) -> Self {
        let outcome = match result {
            Ok(text) => Ok(Output {
                title: shorten(&text, DEFAULT_PREVIEW_CHARS),
                text,
            }),
            Err(e) => {
                log::warn!("{} failed: {}", operation.uid(), e);
                Err(e)
            }
        };
        Self {
            operation,
            subtitle: subtitle.into(),
            outcome,
        }
    }

    /// Successful result with a caller-provided title.
    fn titled(
        operation: Operation,
        subtitle: impl Into<String>,
        title: String,
        text: String,
    ) -> Self {
        Self {
            operation,
            subtitle: subtitle.into(),
            outcome: Ok(Output { title, text }),
        }
    }

    /// The transformed text, or the error. Unlike [`Transformed::into_text`],
    /// this tells an empty result apart from a failure.
    pub fn result(&self) -> Result<&str, &TransformError> {
        self.outcome.as_ref().map(|o| o.text.as_str())
    }

    /// Plain-text output. A failed transformation yields an empty string.
    pub fn into_text(self) -> String {
        self.outcome.map(|o| o.text).unwrap_or_default()
    }

    /// Launcher item for this outcome. A failure gives an invalid item with an
    /// empty `arg` and the operation's fallback title.
    pub fn to_item(&self, icon: Option<&str>) -> Item {
        let uid = self.operation.uid();
        match &self.outcome {
            Ok(out) => Item::new(
                out.title.as_str(),
                self.subtitle.as_str(),
                out.text.as_str(),
                true,
                uid,
                icon,
            ),
            Err(_) => Item::new(
                self.operation.fallback_title(),
                self.subtitle.as_str(),
                "",
                false,
                uid,
                icon,
            ),
        }
    }
}
