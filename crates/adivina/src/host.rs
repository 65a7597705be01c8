//! The host loop: carries out the game's intents against real speech.

use std::time::Duration;

use adivina_game::Intent;
use adivina_speech::{Recognizer, Voice};

use crate::{AdivinaError, GameHandle};

/// Why [`Host::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostExit {
    /// The player declined a replay and the farewell was spoken.
    Terminated,
    /// The recognizer's input ended before the game did.
    InputClosed,
}

/// What the host waits for after executing a batch of intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Await {
    Playback,
    Utterance,
    Terminate,
}

/// Connects a game actor to a [`Recognizer`] and a [`Voice`].
pub struct Host<R, V> {
    game: GameHandle,
    recognizer: R,
    voice: V,
    pause_between_messages: Duration,
    exit_delay: Duration,
}

impl<R: Recognizer, V: Voice> Host<R, V> {
    pub fn new(game: GameHandle, recognizer: R, voice: V) -> Self {
        Self {
            game,
            recognizer,
            voice,
            pause_between_messages: Duration::ZERO,
            exit_delay: Duration::ZERO,
        }
    }

    /// Waits `between_messages` after each spoken message and
    /// `before_exit` before closing the voice on termination. Both are
    /// zero unless set.
    pub fn with_pauses(mut self, between_messages: Duration, before_exit: Duration) -> Self {
        self.pause_between_messages = between_messages;
        self.exit_delay = before_exit;
        self
    }

    /// Runs one game until it terminates or input runs out.
    ///
    /// Each batch of intents is carried out in order. A batch that ends
    /// with speech is followed by a playback notification to the game; a
    /// batch that ends listening is followed by the next utterance, with
    /// the recognizer paused while that utterance is evaluated.
    ///
    /// The game actor is shut down on every exit path that returns `Ok`.
    pub async fn run(mut self) -> Result<HostExit, AdivinaError> {
        tracing::info!("host running");
        let mut intents = self.game.start().await?;

        let exit = loop {
            match self.execute(intents).await? {
                Await::Playback => {
                    intents = self.game.playback_finished().await?;
                }
                Await::Utterance => {
                    let Some(text) = self.recognizer.recognized().await? else {
                        tracing::info!("recognizer input closed");
                        break HostExit::InputClosed;
                    };
                    self.recognizer.stop_listening().await?;
                    intents = self.game.utterance(text).await?;
                }
                Await::Terminate => {
                    pause(self.exit_delay).await;
                    self.voice.close().await?;
                    break HostExit::Terminated;
                }
            }
        };

        let info = self.game.info().await?;
        tracing::info!(?exit, rounds = info.round, "host finished");
        self.game.shutdown().await?;
        Ok(exit)
    }

    async fn execute(&mut self, intents: Vec<Intent>) -> Result<Await, AdivinaError> {
        if intents.is_empty() {
            // The game ignored the event; resume listening.
            tracing::debug!("no intents, listening again");
            self.recognizer.start_listening().await?;
            return Ok(Await::Utterance);
        }

        let mut next = Await::Utterance;
        for intent in intents {
            match intent {
                Intent::Speak(message) => {
                    tracing::debug!(cue = %message.cue(), %message, "speaking");
                    self.voice.speak(&message).await?;
                    pause(self.pause_between_messages).await;
                    next = Await::Playback;
                }
                Intent::ListenForGuess | Intent::ListenForReplayAnswer => {
                    self.recognizer.start_listening().await?;
                    next = Await::Utterance;
                }
                Intent::Terminate => return Ok(Await::Terminate),
            }
        }
        Ok(next)
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
