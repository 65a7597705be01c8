//! What the game asks the host to do.
//!
//! The game never talks or listens itself. It returns [`Intent`]s, and
//! the host realizes them with whatever it has: recorded clips keyed by
//! [`Cue`], a text-to-speech engine fed with the message's Spanish text,
//! or a remote front-end.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single effect for the host to carry out, in order.
///
/// When a batch ends with [`Intent::Speak`], the host reports back through
/// [`GuessGame::playback_finished`](crate::GuessGame::playback_finished)
/// once the audio is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Intent {
    /// Say this message and wait for it to finish.
    Speak(Message),
    /// Resume speech capture; the next utterance is a guess.
    ListenForGuess,
    /// Resume speech capture; the next utterance answers "play again?".
    ListenForReplayAnswer,
    /// The player is done. Shut down.
    Terminate,
}

/// Everything the game can say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// Range and attempt budget for a new session.
    Intro { min: i32, max: i32, attempts: u32 },
    /// The utterance had no number in it.
    NotUnderstood { min: i32, max: i32 },
    /// The number is outside the range.
    OutOfRange { min: i32, max: i32 },
    /// The number equals the previous guess.
    AlreadySaid,
    /// The secret is higher. `remaining` attempts left.
    Higher { remaining: u32 },
    /// The secret is lower. `remaining` attempts left.
    Lower { remaining: u32 },
    /// The player guessed it.
    Victory { secret: i32 },
    /// Out of attempts; reveals the secret.
    Defeat { secret: i32 },
    /// "Play again?"
    AskReplay,
    /// The player said yes.
    Acknowledge,
    /// The player said no.
    Farewell,
}

/// Semantic category of a message, for hosts that play recorded clips.
///
/// [`Cue::Higher`] and [`Cue::Lower`] carry a count, available from
/// [`Message::remaining`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Intro,
    Higher,
    Lower,
    Victory,
    Defeat,
    Invalid,
    Repeated,
    AskReplay,
    Acknowledge,
    Farewell,
}

impl Message {
    /// The clip category for this message.
    pub fn cue(&self) -> Cue {
        match self {
            Self::Intro { .. } => Cue::Intro,
            Self::NotUnderstood { .. } | Self::OutOfRange { .. } => Cue::Invalid,
            Self::AlreadySaid => Cue::Repeated,
            Self::Higher { .. } => Cue::Higher,
            Self::Lower { .. } => Cue::Lower,
            Self::Victory { .. } => Cue::Victory,
            Self::Defeat { .. } => Cue::Defeat,
            Self::AskReplay => Cue::AskReplay,
            Self::Acknowledge => Cue::Acknowledge,
            Self::Farewell => Cue::Farewell,
        }
    }

    /// Attempts left, for messages that announce them.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Higher { remaining } | Self::Lower { remaining } => Some(*remaining),
            _ => None,
        }
    }
}

/// The Spanish text of the message, ready for a TTS engine.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro { min, max, attempts } => write!(
                f,
                "He elegido un número entre {min} y {max}. \
                 Tienes {attempts} intentos para adivinarlo. Dime un número."
            ),
            Self::NotUnderstood { min, max } => write!(
                f,
                "No he entendido. Por favor, dime un número del {min} al {max}."
            ),
            Self::OutOfRange { min, max } => {
                write!(f, "Solo son válidos números entre {min} y {max}.")
            }
            Self::AlreadySaid => write!(f, "Ese número ya lo has dicho."),
            Self::Higher { remaining } => write_hint(f, "Mayor", *remaining),
            Self::Lower { remaining } => write_hint(f, "Menor", *remaining),
            Self::Victory { secret } => {
                write!(f, "¡Correcto! Has adivinado el número {secret}.")
            }
            Self::Defeat { secret } => {
                write!(f, "Has agotado tus intentos. El número era {secret}.")
            }
            Self::AskReplay => write!(f, "¿Quieres jugar otra vez? Responde sí o no."),
            Self::Acknowledge => write!(f, "¡Vamos allá!"),
            Self::Farewell => write!(f, "Gracias por jugar. Hasta pronto."),
        }
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, hint: &str, remaining: u32) -> fmt::Result {
    let noun = if remaining == 1 {
        "intento restante"
    } else {
        "intentos restantes"
    };
    write!(f, "{hint}. Te quedan {remaining} {noun}.")
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Higher => "higher",
            Self::Lower => "lower",
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Invalid => "invalid",
            Self::Repeated => "repeated",
            Self::AskReplay => "ask_replay",
            Self::Acknowledge => "acknowledge",
            Self::Farewell => "farewell",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_text() {
        let msg = Message::Intro {
            min: 0,
            max: 100,
            attempts: 5,
        };
        assert_eq!(
            msg.to_string(),
            "He elegido un número entre 0 y 100. Tienes 5 intentos para adivinarlo. Dime un número."
        );
    }

    #[test]
    fn test_hint_uses_plural() {
        assert_eq!(
            Message::Higher { remaining: 4 }.to_string(),
            "Mayor. Te quedan 4 intentos restantes."
        );
        assert_eq!(
            Message::Lower { remaining: 2 }.to_string(),
            "Menor. Te quedan 2 intentos restantes."
        );
    }

    #[test]
    fn test_hint_uses_singular_for_one() {
        assert_eq!(
            Message::Lower { remaining: 1 }.to_string(),
            "Menor. Te quedan 1 intento restante."
        );
    }

    #[test]
    fn test_end_messages_reveal_secret() {
        assert!(Message::Victory { secret: 42 }.to_string().contains("42"));
        assert!(Message::Defeat { secret: 17 }.to_string().contains("17"));
    }

    #[test]
    fn test_cues() {
        assert_eq!(Message::AlreadySaid.cue(), Cue::Repeated);
        assert_eq!(Message::OutOfRange { min: 0, max: 1 }.cue(), Cue::Invalid);
        assert_eq!(Message::NotUnderstood { min: 0, max: 1 }.cue(), Cue::Invalid);
        assert_eq!(Message::Higher { remaining: 3 }.cue(), Cue::Higher);
        assert_eq!(Message::AskReplay.cue(), Cue::AskReplay);
    }

    #[test]
    fn test_remaining() {
        assert_eq!(Message::Higher { remaining: 3 }.remaining(), Some(3));
        assert_eq!(Message::Victory { secret: 1 }.remaining(), None);
    }

    #[test]
    fn test_cue_display_matches_serde_name() {
        let json = serde_json::to_string(&Cue::AskReplay).unwrap();
        assert_eq!(json, format!("\"{}\"", Cue::AskReplay));
    }

    #[test]
    fn test_intent_serializes_adjacently_tagged() {
        let json = serde_json::to_value(Intent::Speak(Message::Lower { remaining: 2 })).unwrap();
        assert_eq!(json["kind"], "speak");
        assert_eq!(json["message"]["type"], "lower");
        assert_eq!(json["message"]["remaining"], 2);

        let json = serde_json::to_value(Intent::ListenForGuess).unwrap();
        assert_eq!(json["kind"], "listen_for_guess");
    }
}
