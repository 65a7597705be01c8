//! # Adivina
//!
//! A voice-driven Spanish "guess the number" game.
//!
//! The pieces live in their own crates and are re-exported here:
//!
//! - [`adivina_numbers`] parses spoken Spanish numbers ("cuarenta y dos").
//! - [`adivina_game`] is the pure game state machine, emitting [`Intent`]s.
//! - [`adivina_speech`] defines the [`Recognizer`] and [`Voice`] a host
//!   plugs in, with console and WebSocket implementations.
//!
//! This crate adds the host: a game actor and the loop that carries out
//! intents against real speech.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adivina::prelude::*;
//!
//! # async fn run() -> Result<(), AdivinaError> {
//! let config = HostConfig::default();
//! let game = spawn_game(config.build_game(), config.channel_size);
//! let host = Host::new(game, ConsoleRecognizer::stdin(), ConsoleVoice::stdout());
//! host.run().await?;
//! # Ok(())
//! # }
//! ```

mod actor;
mod config;
mod error;
mod host;

pub use actor::{spawn_game, GameHandle, GameInfo};
pub use adivina_game::{self as game, GameConfig, GuessGame, Intent, Message, Phase};
pub use adivina_numbers::{self as numbers, parse_number, NumberParser};
pub use adivina_speech::{self as speech, Recognizer, Voice};
pub use config::HostConfig;
pub use error::AdivinaError;
pub use host::{Host, HostExit};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to [`DEFAULT_LOG_FILTER`].
/// Calling it twice is harmless; the second call does nothing.
pub fn init_logging() {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = log_subscriber(filter, std::io::stderr).try_init();
}

pub(crate) fn log_subscriber<W>(
    filter: tracing_subscriber::EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Common imports for host binaries.
pub mod prelude {
    pub use crate::{
        init_logging, spawn_game, AdivinaError, GameConfig, GameHandle, GameInfo, GuessGame,
        Host, HostConfig, HostExit, Intent, Message, Phase, Recognizer, Voice,
    };
    pub use adivina_speech::{ConsoleRecognizer, ConsoleVoice, SpeechError};
    #[cfg(feature = "websocket")]
    pub use adivina_speech::{RemoteSpeech, SpeechServer};
}
