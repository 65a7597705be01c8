//! Remote speech front-end over WebSocket using `tokio-tungstenite`.
//!
//! A browser or phone app does the actual listening and talking. The host
//! sends it [`Frame::Speak`] / [`Frame::StartListening`] /
//! [`Frame::StopListening`] / [`Frame::Terminate`], and the front-end
//! answers with [`Frame::Recognized`] and [`Frame::PlaybackFinished`].
//! Frames are JSON text messages.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::{Cue, Message, Recognizer, SpeechError, Voice};

type WsStream = tokio_tungstenite::WebSocketStream<TcpStream>;
type WsSink = Arc<Mutex<SplitSink<WsStream, WsMessage>>>;

/// Recognized utterances buffered between the reader task and the
/// recognizer. The host consumes one per question.
const TEXT_QUEUE: usize = 8;

/// One JSON frame exchanged with a remote front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    /// Host → front-end: say this.
    Speak {
        cue: Cue,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        remaining: Option<u32>,
    },
    /// Host → front-end: resume speech capture.
    StartListening,
    /// Host → front-end: pause speech capture.
    StopListening,
    /// Host → front-end: the game is over, close up.
    Terminate,
    /// Front-end → host: an utterance was recognized.
    Recognized { text: String },
    /// Front-end → host: the last `Speak` has finished playing.
    PlaybackFinished,
}

impl Frame {
    pub fn speak(message: &Message) -> Self {
        Self::Speak {
            cue: message.cue(),
            text: message.to_string(),
            remaining: message.remaining(),
        }
    }

    pub fn encode(&self) -> Result<String, SpeechError> {
        serde_json::to_string(self).map_err(|e| SpeechError::Protocol(e.to_string()))
    }

    pub fn decode(text: &str) -> Result<Self, SpeechError> {
        serde_json::from_str(text).map_err(|e| SpeechError::Protocol(e.to_string()))
    }
}

/// Listens for a remote speech front-end.
pub struct SpeechServer {
    listener: TcpListener,
}

impl SpeechServer {
    /// Binds to `addr`. Use port 0 to let the OS pick.
    pub async fn bind(addr: &str) -> Result<Self, SpeechError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(SpeechError::AcceptFailed)?;
        tracing::info!(addr, "speech front-end server listening");
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, SpeechError> {
        self.listener.local_addr().map_err(SpeechError::AcceptFailed)
    }

    /// Waits for one front-end to connect and completes the handshake.
    pub async fn accept(&self) -> Result<RemoteSpeech, SpeechError> {
        let (stream, peer) = self
            .listener
            .accept()
            .await
            .map_err(SpeechError::AcceptFailed)?;

        let ws = tokio_tungstenite::accept_async(stream).await.map_err(|e| {
            SpeechError::AcceptFailed(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                e,
            ))
        })?;

        tracing::debug!(%peer, "speech front-end connected");
        Ok(RemoteSpeech { ws, peer })
    }
}

/// A connected front-end, not yet split into its two halves.
pub struct RemoteSpeech {
    ws: WsStream,
    peer: SocketAddr,
}

impl RemoteSpeech {
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Splits the connection into a [`Recognizer`] and a [`Voice`].
    ///
    /// A background task reads inbound frames and routes recognized text
    /// to the recognizer and playback notifications to the voice. Text that
    /// arrives while the recognizer is not listening is dropped. When the
    /// front-end disconnects the recognizer yields `None` and the voice
    /// reports [`SpeechError::Closed`].
    ///
    /// Must be called inside a Tokio runtime.
    pub fn split(self) -> (RemoteRecognizer, RemoteVoice) {
        let (sink, stream) = self.ws.split();
        let sink: WsSink = Arc::new(Mutex::new(sink));
        let listening = Arc::new(AtomicBool::new(false));
        let (text_tx, text_rx) = mpsc::channel(TEXT_QUEUE);
        let (done_tx, done_rx) = mpsc::unbounded_channel();

        tokio::spawn(read_frames(
            stream,
            self.peer,
            Arc::clone(&listening),
            text_tx,
            done_tx,
        ));

        (
            RemoteRecognizer {
                sink: Arc::clone(&sink),
                listening,
                texts: text_rx,
            },
            RemoteVoice {
                sink,
                finished: done_rx,
            },
        )
    }
}

async fn read_frames(
    mut stream: SplitStream<WsStream>,
    peer: SocketAddr,
    listening: Arc<AtomicBool>,
    texts: mpsc::Sender<String>,
    finished: mpsc::UnboundedSender<()>,
) {
    while let Some(msg) = stream.next().await {
        let frame = match msg {
            Ok(WsMessage::Text(text)) => Frame::decode(&text),
            Ok(WsMessage::Binary(data)) => serde_json::from_slice(&data)
                .map_err(|e| SpeechError::Protocol(e.to_string())),
            Ok(WsMessage::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(%peer, error = %e, "speech front-end read failed");
                break;
            }
        };

        match frame {
            Ok(Frame::Recognized { text }) => {
                if !listening.load(Ordering::Acquire) {
                    tracing::debug!(%peer, %text, "not listening, utterance dropped");
                    continue;
                }
                match texts.try_send(text) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(text)) => {
                        tracing::warn!(%peer, %text, "utterance queue full, dropped");
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
            Ok(Frame::PlaybackFinished) => {
                // The voice may already be gone; the recognizer still matters.
                let _ = finished.send(());
            }
            Ok(other) => {
                tracing::warn!(%peer, ?other, "unexpected frame from front-end");
            }
            Err(e) => {
                tracing::warn!(%peer, error = %e, "malformed frame from front-end");
            }
        }
    }
    tracing::debug!(%peer, "speech front-end disconnected");
}

async fn send_frame(sink: &WsSink, frame: &Frame) -> Result<(), SpeechError> {
    let json = frame.encode()?;
    sink.lock()
        .await
        .send(WsMessage::Text(json.into()))
        .await
        .map_err(|e| {
            SpeechError::SendFailed(std::io::Error::new(std::io::ErrorKind::BrokenPipe, e))
        })
}

/// The listening half of a [`RemoteSpeech`].
pub struct RemoteRecognizer {
    sink: WsSink,
    listening: Arc<AtomicBool>,
    texts: mpsc::Receiver<String>,
}

impl RemoteRecognizer {
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }
}

impl Recognizer for RemoteRecognizer {
    async fn start_listening(&mut self) -> Result<(), SpeechError> {
        // Anything still queued answered an earlier question.
        while self.texts.try_recv().is_ok() {}
        self.listening.store(true, Ordering::Release);
        send_frame(&self.sink, &Frame::StartListening).await
    }

    async fn stop_listening(&mut self) -> Result<(), SpeechError> {
        self.listening.store(false, Ordering::Release);
        send_frame(&self.sink, &Frame::StopListening).await
    }

    async fn recognized(&mut self) -> Result<Option<String>, SpeechError> {
        Ok(self.texts.recv().await)
    }
}

/// The speaking half of a [`RemoteSpeech`].
pub struct RemoteVoice {
    sink: WsSink,
    finished: mpsc::UnboundedReceiver<()>,
}

impl Voice for RemoteVoice {
    async fn speak(&mut self, message: &Message) -> Result<(), SpeechError> {
        // Drop notifications that arrived while nothing was playing.
        while self.finished.try_recv().is_ok() {}

        send_frame(&self.sink, &Frame::speak(message)).await?;
        self.finished.recv().await.ok_or(SpeechError::Closed)
    }

    async fn close(&mut self) -> Result<(), SpeechError> {
        send_frame(&self.sink, &Frame::Terminate).await?;
        self.sink.lock().await.close().await.map_err(|e| {
            SpeechError::SendFailed(std::io::Error::new(std::io::ErrorKind::BrokenPipe, e))
        })
    }
}
