//! Guess-the-number dialogue state machine for Adivina.
//!
//! The game picks a secret number, the player says guesses out loud, and
//! the game answers "Mayor" or "Menor" until the player wins, runs out of
//! attempts, or declines to play again.
//!
//! The machine does no I/O and never waits. Every event goes in as a
//! method call and comes back out as a list of [`Intent`]s that the host
//! carries out (speak a message, listen for a guess, terminate):
//!
//! ```text
//! recognized text ──→ GuessGame::on_utterance ──→ [Speak(..), ListenForGuess]
//! playback done   ──→ GuessGame::playback_finished ──→ [ListenForGuess]
//! ```
//!
//! # Key types
//!
//! - [`GuessGame`]: the state machine
//! - [`GameSession`]: one play-through: secret, attempts, last guess
//! - [`GameConfig`]: range and attempt budget
//! - [`Phase`]: where the dialogue is
//! - [`Intent`] / [`Message`] / [`Cue`]: what the host should do next
//! - [`SecretSource`]: where secrets come from (random, seeded, fixed)

mod config;
mod error;
mod intent;
mod machine;
mod replay;
mod secret;
mod session;

pub use config::{GameConfig, Phase};
pub use error::Rejection;
pub use intent::{Cue, Intent, Message};
pub use machine::{log_secret, GuessGame};
pub use replay::ReplayAnswer;
pub use secret::{FixedSecret, RandomSecret, ScriptedSecret, SecretSource, SeededSecret};
pub use session::{GameSession, Verdict};
