//! Spoken-number parsing for Adivina.
//!
//! Speech recognizers hand us free-form text: sometimes digits ("42"),
//! sometimes words ("cuarenta y dos"), often surrounded by filler
//! ("creo que es el cuarenta y dos"). This crate turns that text into a
//! single integer.
//!
//! - **Tokenizer** ([`tokenize`]): splits on whitespace and `, . : ;`.
//! - **Vocabulary** ([`word_value`], [`vocabulary`]): Spanish number
//!   words from "cero" to "cien", including "veinti-" and "X y Y"
//!   compounds.
//! - **Parser** ([`NumberParser`], [`parse_number`]): scans tokens in
//!   order and returns the first number it recognizes.
//!
//! ```rust
//! use adivina_numbers::parse_number;
//!
//! assert_eq!(parse_number("el 42").unwrap(), 42);
//! assert_eq!(parse_number("treinta y cinco").unwrap(), 35);
//! assert_eq!(parse_number("Veintidós").unwrap(), 22);
//! assert!(parse_number("no sé").is_err());
//! ```
//!
//! This crate has no knowledge of the game. It sits at the bottom of the
//! stack:
//!
//! ```text
//! Speech (text) → Numbers (i32) → Game (verdict)
//! ```

mod error;
mod parser;
mod vocabulary;

pub use error::NumberError;
pub use parser::{parse_number, tokenize, NumberParser, SEPARATORS};
pub use vocabulary::{fold, vocabulary, word_value, MAX_WORD_VALUE};
