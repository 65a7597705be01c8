//! Classifying the answer to "¿Quieres jugar otra vez?".

use adivina_numbers::{fold, tokenize};
use serde::{Deserialize, Serialize};

use crate::Rejection;

const AFFIRMATIVE: &[&str] = &["si", "s", "vale"];
const NEGATIVE: &[&str] = &["no", "n"];

/// The player's answer to the replay prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayAnswer {
    Yes,
    No,
}

impl ReplayAnswer {
    /// Classifies a recognized answer.
    ///
    /// The text is tokenized like a guess, each token is folded
    /// (lowercase, no accents) and stripped of `¿?¡!`, and tokens are
    /// matched exactly against the yes-words {si, s, vale} and then the
    /// no-words {no, n}. Yes wins when both appear. Words that merely
    /// contain "si" or "no" ("sino", "nunca", "bueno") match neither.
    ///
    /// # Errors
    /// Returns [`Rejection::AmbiguousReplayAnswer`] if no token matches.
    pub fn classify(text: &str) -> Result<Self, Rejection> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .map(|token| fold(token.trim_matches(|c: char| matches!(c, '¿' | '?' | '¡' | '!'))))
            .collect();

        if any_of(&words, AFFIRMATIVE) {
            Ok(Self::Yes)
        } else if any_of(&words, NEGATIVE) {
            Ok(Self::No)
        } else {
            Err(Rejection::AmbiguousReplayAnswer)
        }
    }
}

fn any_of(words: &[String], set: &[&str]) -> bool {
    words.iter().any(|w| set.iter().any(|s| w.as_str() == *s))
}
