//! Tokenizer and first-number-wins parser.

use crate::vocabulary::{fold, tens_value, unit_value, word_value};
use crate::NumberError;

/// Punctuation that separates tokens, in addition to whitespace.
pub const SEPARATORS: &[char] = &[',', '.', ':', ';'];

/// Splits recognized text into tokens on whitespace and [`SEPARATORS`],
/// dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Extracts the first number from recognized speech.
///
/// Tokens are scanned left to right. At each position the parser tries,
/// in order:
///
/// 1. a literal base-10 integer ("42", "-5", "+7");
/// 2. a three-token compound `<tens> y <unit>` ("cuarenta y dos");
/// 3. a single number word ("veintidós", "cien").
///
/// The first hit wins, even if a later token looks more plausible:
/// "dos o tres" is 2.
///
/// The parser is stateless; it is a type so that callers can hold one
/// and swap it in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser;

impl NumberParser {
    /// Creates a parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses `text` into an integer.
    ///
    /// # Errors
    /// Returns [`NumberError::NotFound`] if no token is a number. Empty
    /// and whitespace-only text always fails.
    pub fn parse(&self, text: &str) -> Result<i32, NumberError> {
        let tokens = tokenize(text);

        for (i, token) in tokens.iter().enumerate() {
            if let Ok(value) = token.parse::<i32>() {
                return Ok(value);
            }
            if let Some(value) = joined_compound(&tokens[i..]) {
                return Ok(value);
            }
            if let Some(value) = word_value(token) {
                return Ok(value);
            }
        }

        Err(NumberError::NotFound {
            text: text.to_string(),
        })
    }
}

/// Shorthand for `NumberParser::new().parse(text)`.
pub fn parse_number(text: &str) -> Result<i32, NumberError> {
    NumberParser::new().parse(text)
}

/// Matches `<tens> y <unit>` at the start of `tokens`.
fn joined_compound(tokens: &[&str]) -> Option<i32> {
    match tokens {
        [tens, y, unit, ..] if fold(y) == "y" => {
            Some(tens_value(&fold(tens))? + unit_value(&fold(unit))?)
        }
        _ => None,
    }
}
