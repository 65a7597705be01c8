//! Error types for number parsing.

/// Errors returned by [`NumberParser::parse`](crate::NumberParser::parse).
///
/// There is only one way to fail: nothing in the text looked like a
/// number. Callers usually recover by asking the player again, so the
/// original text is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// No token in the text was a literal integer or a known number word.
    #[error("no number found in {text:?}")]
    NotFound {
        /// The text that was scanned.
        text: String,
    },
}
