//! Speech collaborators for Adivina.
//!
//! The game core neither hears nor talks. This crate defines the two
//! capabilities a host needs to plug it into the world, and ships
//! implementations of both:
//!
//! - [`Recognizer`]: turns speech into text (`start_listening`,
//!   `stop_listening`, `recognized`). Local dictation, a cloud STT client
//!   and a typed console are interchangeable behind it.
//! - [`Voice`]: says a [`Message`] and resolves once playback is over,
//!   whether through recorded clips, a TTS engine or plain text.
//!
//! # Feature Flags
//!
//! - `websocket` (default): a remote front-end (browser, phone) that does
//!   its own STT/TTS and talks JSON frames over a WebSocket.

#![allow(async_fn_in_trait)]

mod console;
mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use adivina_game::{Cue, Message};
pub use console::{ConsoleRecognizer, ConsoleVoice};
pub use error::SpeechError;
#[cfg(feature = "websocket")]
pub use websocket::{Frame, RemoteRecognizer, RemoteSpeech, RemoteVoice, SpeechServer};

/// Produces recognized speech.
///
/// The host arms the recognizer with [`start_listening`](Self::start_listening)
/// when the game wants input, stops it while an utterance is evaluated,
/// and awaits [`recognized`](Self::recognized) for the next utterance.
pub trait Recognizer {
    /// Resumes speech capture.
    async fn start_listening(&mut self) -> Result<(), SpeechError>;

    /// Pauses speech capture.
    async fn stop_listening(&mut self) -> Result<(), SpeechError>;

    /// Waits for the next recognized utterance.
    ///
    /// Returns `Ok(None)` when the source is closed for good. An empty
    /// string means "heard something, recognized nothing".
    async fn recognized(&mut self) -> Result<Option<String>, SpeechError>;
}

/// Speaks game messages.
pub trait Voice {
    /// Says `message`, resolving once playback has finished.
    async fn speak(&mut self, message: &Message) -> Result<(), SpeechError>;

    /// Called once when the game terminates. Default: no-op.
    async fn close(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }
}
