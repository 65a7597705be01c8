//! A single play-through: the secret, the attempt budget, the last guess.

use serde::{Deserialize, Serialize};

use crate::{GameConfig, Rejection};

/// The outcome of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The guess is the secret.
    Correct,
    /// The secret is higher than the guess ("Mayor").
    Higher,
    /// The secret is lower than the guess ("Menor").
    Lower,
    /// Wrong, and that was the last attempt.
    Exhausted,
}

/// State of one play-through.
///
/// Created by [`GuessGame::start`](crate::GuessGame::start) and replaced
/// wholesale when the player plays again; nothing carries over.
///
/// Invariants:
/// - `secret` never changes and lies within `min..=max`.
/// - `attempts_remaining` only goes down, by exactly one per accepted
///   guess, and never below zero.
/// - A guess is compared against `secret` only if it is in range and
///   differs from `last_guess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    round: u64,
    secret: i32,
    min: i32,
    max: i32,
    max_attempts: u32,
    attempts_remaining: u32,
    last_guess: Option<i32>,
    solved: bool,
}

impl GameSession {
    /// Creates a session. `secret` is clamped into the config's range.
    pub fn new(round: u64, config: &GameConfig, secret: i32) -> Self {
        Self {
            round,
            secret: secret.clamp(config.min, config.max),
            min: config.min,
            max: config.max,
            max_attempts: config.max_attempts,
            attempts_remaining: config.max_attempts,
            last_guess: None,
            solved: false,
        }
    }

    /// 1-based count of sessions played by the game that created this one.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// The most recent accepted guess, if any.
    pub fn last_guess(&self) -> Option<i32> {
        self.last_guess
    }

    /// Returns `true` once the secret was guessed or attempts ran out.
    pub fn is_over(&self) -> bool {
        self.solved || self.attempts_remaining == 0
    }

    /// Checks a guess and, if it is accepted, spends an attempt on it.
    ///
    /// Checks run in this order: session over, out of range, repeated.
    /// A rejected guess leaves the session untouched.
    ///
    /// # Errors
    /// - [`Rejection::SessionOver`] after a win or defeat.
    /// - [`Rejection::OutOfRange`] if `value` is outside `min..=max`.
    /// - [`Rejection::RepeatedGuess`] if `value` equals the last guess.
    pub fn submit(&mut self, value: i32) -> Result<Verdict, Rejection> {
        if self.is_over() {
            return Err(Rejection::SessionOver);
        }
        if !(self.min..=self.max).contains(&value) {
            return Err(Rejection::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.last_guess == Some(value) {
            return Err(Rejection::RepeatedGuess(value));
        }

        self.last_guess = Some(value);
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let verdict = if value == self.secret {
            self.solved = true;
            Verdict::Correct
        } else if self.attempts_remaining == 0 {
            Verdict::Exhausted
        } else if value < self.secret {
            Verdict::Higher
        } else {
            Verdict::Lower
        };
        Ok(verdict)
    }
}
