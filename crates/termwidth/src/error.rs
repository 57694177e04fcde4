//! Error types for the termwidth crate.

use thiserror::Error;

/// Errors returned by the arity-checked entry points.
///
/// A non-printable result is not an error: it is reported through
/// [`Width::NonPrintable`](crate::Width::NonPrintable) or a `None` total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthError {
    /// The input did not hold exactly one Unicode scalar value.
    #[error("need a single codepoint, got {input:?}")]
    InvalidInput {
        /// The rejected input.
        input: String,
    },
}

impl WidthError {
    pub(crate) fn invalid_input(input: &str) -> Self {
        WidthError::InvalidInput {
            input: input.to_string(),
        }
    }
}

/// Result type for termwidth operations.
pub type Result<T> = std::result::Result<T, WidthError>;

/// Returns the only scalar value of `text`, or [`WidthError::InvalidInput`].
pub(crate) fn single_codepoint(text: &str) -> Result<u32> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c as u32),
        _ => Err(WidthError::invalid_input(text)),
    }
}
