//! The guess-the-number dialogue state machine.

use adivina_numbers::NumberParser;

use crate::{
    GameConfig, GameSession, Intent, Message, Phase, RandomSecret, Rejection, ReplayAnswer,
    SecretSource, Verdict,
};

type SessionHook = Box<dyn FnMut(&GameSession) + Send>;

/// The game: one session at a time, plus the dialogue around it.
///
/// Drive it with three calls, each returning the [`Intent`]s to carry out:
///
/// - [`start`](Self::start): begin a session (intro message).
/// - [`on_utterance`](Self::on_utterance): the recognizer heard something.
/// - [`playback_finished`](Self::playback_finished): the last spoken
///   message is done.
///
/// Calls are handled one at a time and none of them block. Utterances
/// that arrive while the game isn't listening are dropped.
pub struct GuessGame<S: SecretSource = RandomSecret> {
    config: GameConfig,
    parser: NumberParser,
    source: S,
    phase: Phase,
    session: Option<GameSession>,
    rounds: u64,
    hooks: Vec<SessionHook>,
}

impl GuessGame<RandomSecret> {
    /// Creates a game that draws secrets at random.
    pub fn new(config: GameConfig) -> Self {
        Self::with_source(config, RandomSecret)
    }
}

impl<S: SecretSource> GuessGame<S> {
    /// Creates a game that draws secrets from `source`.
    pub fn with_source(config: GameConfig, source: S) -> Self {
        Self {
            config: config.validated(),
            parser: NumberParser::new(),
            source,
            phase: Phase::Intro,
            session: None,
            rounds: 0,
            hooks: Vec::new(),
        }
    }

    /// Registers a callback that runs whenever a session starts.
    ///
    /// Diagnostics live here rather than in the machine; see
    /// [`log_secret`].
    pub fn on_session_start(&mut self, hook: impl FnMut(&GameSession) + Send + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current session. `None` until [`start`](Self::start) is called.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Number of sessions started so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Starts a new session, discarding the previous one.
    ///
    /// Draws a fresh secret, resets the attempts and the last guess, and
    /// returns the intro message. The game moves on to listening once the
    /// host reports [`playback_finished`](Self::playback_finished).
    pub fn start(&mut self) -> Vec<Intent> {
        self.rounds += 1;
        let secret = self.source.draw(self.config.min, self.config.max);
        let session = GameSession::new(self.rounds, &self.config, secret);

        tracing::info!(
            round = self.rounds,
            min = self.config.min,
            max = self.config.max,
            attempts = self.config.max_attempts,
            "session started"
        );
        for hook in &mut self.hooks {
            hook(&session);
        }

        self.session = Some(session);
        self.phase = Phase::Intro;

        vec![Intent::Speak(Message::Intro {
            min: self.config.min,
            max: self.config.max,
            attempts: self.config.max_attempts,
        })]
    }

    /// Handles recognized speech.
    pub fn on_utterance(&mut self, text: &str) -> Vec<Intent> {
        tracing::debug!(phase = %self.phase, text, "utterance");
        match self.phase {
            Phase::AwaitingGuess => self.handle_guess(text),
            Phase::AwaitingReplayAnswer => self.handle_replay_answer(text),
            _ => {
                tracing::debug!(phase = %self.phase, "not listening, utterance ignored");
                Vec::new()
            }
        }
    }

    /// Handles the end of the last spoken message.
    ///
    /// Only matters when the game is waiting on audio: after the intro it
    /// starts listening for guesses, after a win or defeat it asks to play
    /// again, and after the farewell it terminates.
    pub fn playback_finished(&mut self) -> Vec<Intent> {
        match self.phase {
            Phase::Intro if self.session.is_some() => {
                self.transition(Phase::AwaitingGuess);
                vec![Intent::ListenForGuess]
            }
            Phase::SessionEnded => {
                self.transition(Phase::AwaitingReplayAnswer);
                vec![
                    Intent::Speak(Message::AskReplay),
                    Intent::ListenForReplayAnswer,
                ]
            }
            Phase::Closing => vec![Intent::Terminate],
            _ => Vec::new(),
        }
    }

    fn handle_guess(&mut self, text: &str) -> Vec<Intent> {
        self.transition(Phase::Evaluating);

        let Some(session) = self.session.as_mut() else {
            self.transition(Phase::AwaitingGuess);
            return Vec::new();
        };

        let outcome = self
            .parser
            .parse(text)
            .map_err(|_| Rejection::ParseFailure)
            .and_then(|value| session.submit(value).map(|verdict| (value, verdict)));

        let (min, max) = (session.min(), session.max());
        let secret = session.secret();
        let remaining = session.attempts_remaining();

        match outcome {
            Err(rejection) => {
                tracing::debug!(%rejection, text, "guess rejected");
                self.transition(Phase::AwaitingGuess);
                let reply = match rejection {
                    Rejection::OutOfRange { .. } => Message::OutOfRange { min, max },
                    Rejection::RepeatedGuess(_) => Message::AlreadySaid,
                    _ => Message::NotUnderstood { min, max },
                };
                vec![Intent::Speak(reply), Intent::ListenForGuess]
            }
            Ok((value, Verdict::Correct)) => {
                tracing::info!(value, remaining, "secret guessed");
                self.transition(Phase::SessionEnded);
                vec![Intent::Speak(Message::Victory { secret })]
            }
            Ok((value, Verdict::Exhausted)) => {
                tracing::info!(value, secret, "attempts exhausted");
                self.transition(Phase::SessionEnded);
                vec![Intent::Speak(Message::Defeat { secret })]
            }
            Ok((value, verdict)) => {
                tracing::debug!(value, ?verdict, remaining, "wrong guess");
                self.transition(Phase::AwaitingGuess);
                let hint = if verdict == Verdict::Higher {
                    Message::Higher { remaining }
                } else {
                    Message::Lower { remaining }
                };
                vec![Intent::Speak(hint), Intent::ListenForGuess]
            }
        }
    }

    fn handle_replay_answer(&mut self, text: &str) -> Vec<Intent> {
        match ReplayAnswer::classify(text) {
            Ok(ReplayAnswer::Yes) => {
                tracing::info!("player chose to play again");
                let mut intents = vec![Intent::Speak(Message::Acknowledge)];
                intents.extend(self.start());
                intents
            }
            Ok(ReplayAnswer::No) => {
                tracing::info!("player chose to stop");
                self.transition(Phase::Closing);
                vec![Intent::Speak(Message::Farewell)]
            }
            Err(rejection) => {
                tracing::debug!(%rejection, text, "asking again");
                vec![
                    Intent::Speak(Message::AskReplay),
                    Intent::ListenForReplayAnswer,
                ]
            }
        }
    }

    fn transition(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid transition {} -> {}",
            self.phase,
            next
        );
        tracing::trace!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }
}

/// Session-start hook that logs the secret at `info` level, so it shows
/// with the default log filter.
///
/// ```rust
/// use adivina_game::{log_secret, GameConfig, GuessGame};
///
/// let mut game = GuessGame::new(GameConfig::default());
/// game.on_session_start(log_secret);
/// ```
pub fn log_secret(session: &GameSession) {
    tracing::info!(
        round = session.round(),
        secret = session.secret(),
        "secret number"
    );
}
