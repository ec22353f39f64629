//! Error type for the classifier.

use thiserror::Error;

/// The raw input could not be turned into an absolute URL, even after the
/// `https://` fallback. The message leaves the input out; it may be arbitrary
/// text from a scanned code, so callers decide how to show [`ParseError::input`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input is not a valid URL")]
pub struct ParseError {
    /// The raw input as handed to the parser.
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}
