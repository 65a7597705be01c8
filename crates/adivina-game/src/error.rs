//! Rejected input.

/// Why an utterance was not accepted as a move.
///
/// None of these are fatal. The game answers with the matching message
/// and listens again; rejected guesses never cost an attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The utterance contained no recognizable number.
    #[error("no number recognized")]
    ParseFailure,

    /// The number is outside the session's range.
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },

    /// The number equals the previous accepted guess.
    #[error("{0} was the previous guess")]
    RepeatedGuess(i32),

    /// The answer to "play again?" was neither yes nor no.
    #[error("replay answer is neither yes nor no")]
    AmbiguousReplayAnswer,

    /// The session is already won or lost.
    #[error("session is over")]
    SessionOver,
}
