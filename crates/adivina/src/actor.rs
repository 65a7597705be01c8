//! Game actor: an isolated Tokio task that owns a [`GuessGame`].
//!
//! Recognizer results and playback notifications may come from different
//! tasks, but the game must see them one at a time. The actor serializes
//! them through a bounded mpsc channel and answers each on a oneshot.

use adivina_game::{GuessGame, Intent, Phase, SecretSource};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::AdivinaError;

/// Commands sent to the game actor.
pub(crate) enum GameCommand {
    /// Begin a new session.
    Start { reply: oneshot::Sender<Vec<Intent>> },

    /// A recognized utterance.
    Utterance {
        text: String,
        reply: oneshot::Sender<Vec<Intent>>,
    },

    /// The voice finished the last batch of speech.
    PlaybackFinished { reply: oneshot::Sender<Vec<Intent>> },

    /// Request a snapshot.
    GetInfo { reply: oneshot::Sender<GameInfo> },

    /// Stop the actor.
    Shutdown,
}

/// A snapshot of the game, for status displays and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub phase: Phase,
    /// Sessions started so far (0 before the first).
    pub round: u64,
    /// `None` before the first session.
    pub attempts_remaining: Option<u32>,
    pub max_attempts: u32,
}

/// Handle to a running game actor. Cheap to clone.
#[derive(Clone)]
pub struct GameHandle {
    sender: mpsc::Sender<GameCommand>,
}

impl GameHandle {
    /// Starts a session. Returns the intro intents.
    pub async fn start(&self) -> Result<Vec<Intent>, AdivinaError> {
        self.request(|reply| GameCommand::Start { reply }).await
    }

    /// Feeds a recognized utterance.
    pub async fn utterance(&self, text: impl Into<String>) -> Result<Vec<Intent>, AdivinaError> {
        let text = text.into();
        self.request(|reply| GameCommand::Utterance { text, reply })
            .await
    }

    /// Reports that playback has finished.
    pub async fn playback_finished(&self) -> Result<Vec<Intent>, AdivinaError> {
        self.request(|reply| GameCommand::PlaybackFinished { reply })
            .await
    }

    pub async fn info(&self) -> Result<GameInfo, AdivinaError> {
        self.request(|reply| GameCommand::GetInfo { reply }).await
    }

    /// Tells the actor to stop. Pending commands ahead of it still run.
    pub async fn shutdown(&self) -> Result<(), AdivinaError> {
        self.sender
            .send(GameCommand::Shutdown)
            .await
            .map_err(|_| AdivinaError::Unavailable)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> GameCommand,
    ) -> Result<T, AdivinaError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(command(reply_tx))
            .await
            .map_err(|_| AdivinaError::Unavailable)?;
        reply_rx.await.map_err(|_| AdivinaError::Unavailable)
    }
}

struct GameActor<S: SecretSource> {
    game: GuessGame<S>,
    receiver: mpsc::Receiver<GameCommand>,
}

impl<S: SecretSource> GameActor<S> {
    async fn run(mut self) {
        tracing::info!("game actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                GameCommand::Start { reply } => {
                    let _ = reply.send(self.game.start());
                }
                GameCommand::Utterance { text, reply } => {
                    tracing::debug!(%text, phase = %self.game.phase(), "utterance");
                    let _ = reply.send(self.game.on_utterance(&text));
                }
                GameCommand::PlaybackFinished { reply } => {
                    let _ = reply.send(self.game.playback_finished());
                }
                GameCommand::GetInfo { reply } => {
                    let _ = reply.send(self.info());
                }
                GameCommand::Shutdown => {
                    tracing::info!(rounds = self.game.rounds(), "game actor shutting down");
                    break;
                }
            }
        }

        tracing::info!("game actor stopped");
    }

    fn info(&self) -> GameInfo {
        GameInfo {
            phase: self.game.phase(),
            round: self.game.rounds(),
            attempts_remaining: self.game.session().map(|s| s.attempts_remaining()),
            max_attempts: self.game.config().max_attempts,
        }
    }
}

/// Spawns a game actor task and returns a handle to it.
///
/// `channel_size` bounds the command queue; senders wait when it is full.
pub fn spawn_game<S: SecretSource>(game: GuessGame<S>, channel_size: usize) -> GameHandle {
    let (tx, rx) = mpsc::channel(channel_size.max(1));
    tokio::spawn(GameActor { game, receiver: rx }.run());
    GameHandle { sender: tx }
}
