//! Game configuration and dialogue phases.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Configuration for a game.
///
/// Applies to every session the game starts; a new session picks up the
/// same range and attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest valid guess (inclusive).
    pub min: i32,

    /// Largest valid guess (inclusive).
    pub max: i32,

    /// Accepted guesses allowed per session.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            max_attempts: 5,
        }
    }
}

impl GameConfig {
    /// Repairs out-of-range values so the config is safe to use.
    ///
    /// Called automatically by [`GuessGame`](crate::GuessGame). Rules:
    /// - `min > max` swaps the bounds.
    /// - `max_attempts` is at least 1.
    pub fn validated(mut self) -> Self {
        if self.min > self.max {
            tracing::warn!(
                min = self.min,
                max = self.max,
                "min exceeds max, swapping bounds"
            );
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.max_attempts == 0 {
            tracing::warn!("max_attempts is 0, using 1");
            self.max_attempts = 1;
        }
        self
    }

    /// The valid guess range.
    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where the dialogue is.
///
/// ```text
///            ┌──────── not understood / out of range / repeated ───┐
///            ▼                                                      │
/// Intro → AwaitingGuess → Evaluating ─── higher / lower ────────────┘
///   ▲                         │
///   │                   win / defeat
///   │                         ▼
///   │                   SessionEnded → AwaitingReplayAnswer ─ no ─→ Closing
///   └──────────────────────────────── yes ─────┘
/// ```
///
/// - **Intro**: The intro message is playing. Speech is ignored.
/// - **AwaitingGuess**: Listening for a number.
/// - **Evaluating**: A guess is being checked. Only exists inside
///   [`GuessGame::on_utterance`](crate::GuessGame::on_utterance).
/// - **SessionEnded**: The victory or defeat message is playing.
/// - **AwaitingReplayAnswer**: Listening for "sí" or "no".
/// - **Closing**: The farewell is playing; the host terminates next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Intro,
    AwaitingGuess,
    Evaluating,
    SessionEnded,
    AwaitingReplayAnswer,
    Closing,
}

impl Phase {
    /// Returns `true` if the game is waiting for speech.
    pub fn is_listening(&self) -> bool {
        matches!(self, Self::AwaitingGuess | Self::AwaitingReplayAnswer)
    }

    /// Returns `true` once the player has said goodbye.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closing)
    }

    /// Returns `true` if moving to `target` is a valid transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            (Intro, AwaitingGuess)
                | (AwaitingGuess, Evaluating)
                | (Evaluating, AwaitingGuess)
                | (Evaluating, SessionEnded)
                | (SessionEnded, AwaitingReplayAnswer)
                | (AwaitingReplayAnswer, Intro)
                | (AwaitingReplayAnswer, Closing)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intro => write!(f, "Intro"),
            Self::AwaitingGuess => write!(f, "AwaitingGuess"),
            Self::Evaluating => write!(f, "Evaluating"),
            Self::SessionEnded => write!(f, "SessionEnded"),
            Self::AwaitingReplayAnswer => write!(f, "AwaitingReplayAnswer"),
            Self::Closing => write!(f, "Closing"),
        }
    }
}
