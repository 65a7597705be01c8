/// Errors raised by speech collaborators.
///
/// These are the host's problems, not the game's: the game only ever sees
/// recognized text.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// The speech source or sink went away.
    #[error("speech channel closed")]
    Closed,

    /// Writing or sending failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Reading or receiving failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// Binding or accepting a remote front-end failed.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// A remote front-end sent something we don't understand.
    #[error("protocol error: {0}")]
    Protocol(String),
}
