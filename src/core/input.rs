//! Reading the text to transform from an argument or stdin.

use std::io::{self, Read};

/// Error reading input text.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Text from `arg`, or the whole of `reader` when `arg` is absent or `-`.
/// The text is returned as-is: no trimming, newlines kept.
pub fn read_text<R: Read>(arg: Option<&str>, mut reader: R) -> Result<String, InputError> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
