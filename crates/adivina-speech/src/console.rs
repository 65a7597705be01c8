//! Console speech: typed lines in, printed text out.
//!
//! Useful for playing without a microphone and for driving the host in
//! tests with in-memory readers and writers.

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};

use crate::{Message, Recognizer, SpeechError, Voice};

/// A [`Recognizer`] that treats each input line as one utterance.
pub struct ConsoleRecognizer<R> {
    lines: Lines<R>,
    listening: bool,
}

impl ConsoleRecognizer<BufReader<Stdin>> {
    /// Reads utterances from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> ConsoleRecognizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            listening: false,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl<R: AsyncBufRead + Unpin> Recognizer for ConsoleRecognizer<R> {
    async fn start_listening(&mut self) -> Result<(), SpeechError> {
        self.listening = true;
        tracing::trace!("console listening");
        Ok(())
    }

    async fn stop_listening(&mut self) -> Result<(), SpeechError> {
        self.listening = false;
        Ok(())
    }

    async fn recognized(&mut self) -> Result<Option<String>, SpeechError> {
        let line = self
            .lines
            .next_line()
            .await
            .map_err(SpeechError::ReceiveFailed)?;
        Ok(line.map(|l| l.trim().to_string()))
    }
}

/// A [`Voice`] that writes each message as a line of text.
pub struct ConsoleVoice<W> {
    out: W,
    show_cues: bool,
}

impl ConsoleVoice<Stdout> {
    /// Writes to standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> ConsoleVoice<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_cues: false,
        }
    }

    /// Prefixes every line with its cue, e.g. `[higher] Mayor. ...`.
    pub fn with_cues(mut self, show: bool) -> Self {
        self.show_cues = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: AsyncWrite + Unpin> Voice for ConsoleVoice<W> {
    async fn speak(&mut self, message: &Message) -> Result<(), SpeechError> {
        let line = if self.show_cues {
            format!("[{}] {message}\n", message.cue())
        } else {
            format!("{message}\n")
        };
        self.out
            .write_all(line.as_bytes())
            .await
            .map_err(SpeechError::SendFailed)?;
        self.out.flush().await.map_err(SpeechError::SendFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recognizer_yields_trimmed_lines_then_none() {
        let input: &[u8] = b"  cincuenta \n\n42\n";
        let mut rec = ConsoleRecognizer::new(input);

        assert_eq!(rec.recognized().await.unwrap().as_deref(), Some("cincuenta"));
        assert_eq!(rec.recognized().await.unwrap().as_deref(), Some(""));
        assert_eq!(rec.recognized().await.unwrap().as_deref(), Some("42"));
        assert_eq!(rec.recognized().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_recognizer_tracks_listening() {
        let input: &[u8] = b"";
        let mut rec = ConsoleRecognizer::new(input);
        assert!(!rec.is_listening());
        rec.start_listening().await.unwrap();
        assert!(rec.is_listening());
        rec.stop_listening().await.unwrap();
        assert!(!rec.is_listening());
    }

    #[tokio::test]
    async fn test_voice_writes_text() {
        let mut voice = ConsoleVoice::new(Vec::new());
        voice.speak(&Message::AlreadySaid).await.unwrap();
        voice.speak(&Message::Higher { remaining: 1 }).await.unwrap();

        let out = String::from_utf8(voice.into_inner()).unwrap();
        assert_eq!(
            out,
            "Ese número ya lo has dicho.\nMayor. Te quedan 1 intento restante.\n"
        );
    }

    #[tokio::test]
    async fn test_voice_with_cues() {
        let mut voice = ConsoleVoice::new(Vec::new()).with_cues(true);
        voice.speak(&Message::Farewell).await.unwrap();

        let out = String::from_utf8(voice.into_inner()).unwrap();
        assert!(out.starts_with("[farewell] Gracias por jugar"));
    }
}
