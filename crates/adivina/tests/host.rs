//! End-to-end tests for the host loop.
//!
//! A scripted recognizer and a recording voice stand in for real speech,
//! so each test can check exactly what was said and when the host listened.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use adivina::game::{Cue, FixedSecret, ScriptedSecret, SecretSource};
use adivina::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

type Events = Arc<Mutex<Vec<String>>>;

/// Replays a fixed list of utterances, then reports closed input.
struct ScriptedRecognizer {
    utterances: VecDeque<String>,
    events: Events,
    listening: bool,
}

impl Recognizer for ScriptedRecognizer {
    async fn start_listening(&mut self) -> Result<(), SpeechError> {
        self.listening = true;
        self.events.lock().unwrap().push("listen".into());
        Ok(())
    }

    async fn stop_listening(&mut self) -> Result<(), SpeechError> {
        self.listening = false;
        self.events.lock().unwrap().push("stop".into());
        Ok(())
    }

    async fn recognized(&mut self) -> Result<Option<String>, SpeechError> {
        assert!(self.listening, "host asked for speech while not listening");
        Ok(self.utterances.pop_front())
    }
}

/// Records every message it is asked to say.
struct RecordingVoice {
    events: Events,
    spoken: Arc<Mutex<Vec<Message>>>,
    fail_on: Option<Cue>,
}

impl Voice for RecordingVoice {
    async fn speak(&mut self, message: &Message) -> Result<(), SpeechError> {
        if self.fail_on == Some(message.cue()) {
            return Err(SpeechError::Closed);
        }
        self.events
            .lock()
            .unwrap()
            .push(format!("say:{}", message.cue()));
        self.spoken.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SpeechError> {
        self.events.lock().unwrap().push("close".into());
        Ok(())
    }
}

struct Run {
    exit: Result<HostExit, AdivinaError>,
    events: Vec<String>,
    spoken: Vec<Message>,
    handle: GameHandle,
}

async fn run_with<S: SecretSource>(source: S, utterances: &[&str], fail_on: Option<Cue>) -> Run {
    run_paced(source, utterances, fail_on, Duration::ZERO, Duration::ZERO).await
}

async fn run_paced<S: SecretSource>(
    source: S,
    utterances: &[&str],
    fail_on: Option<Cue>,
    between_messages: Duration,
    before_exit: Duration,
) -> Run {
    let events: Events = Arc::default();
    let spoken = Arc::new(Mutex::new(Vec::new()));

    let game = GuessGame::with_source(GameConfig::default(), source);
    let handle = spawn_game(game, 8);
    let recognizer = ScriptedRecognizer {
        utterances: utterances.iter().map(|u| u.to_string()).collect(),
        events: Arc::clone(&events),
        listening: false,
    };
    let voice = RecordingVoice {
        events: Arc::clone(&events),
        spoken: Arc::clone(&spoken),
        fail_on,
    };

    let exit = Host::new(handle.clone(), recognizer, voice)
        .with_pauses(between_messages, before_exit)
        .run()
        .await;
    let events = events.lock().unwrap().clone();
    let spoken = spoken.lock().unwrap().clone();
    Run {
        exit,
        events,
        spoken,
        handle,
    }
}

// =========================================================================
// Full games
// =========================================================================

#[tokio::test]
async fn test_win_then_decline() {
    let run = run_with(
        FixedSecret(42),
        &["cincuenta", "veinte", "cuarenta y dos", "no"],
        None,
    )
    .await;

    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
    assert_eq!(
        run.spoken,
        vec![
            Message::Intro {
                min: 0,
                max: 100,
                attempts: 5
            },
            Message::Lower { remaining: 4 },
            Message::Higher { remaining: 3 },
            Message::Victory { secret: 42 },
            Message::AskReplay,
            Message::Farewell,
        ]
    );
}

#[tokio::test]
async fn test_listening_is_paused_while_evaluating() {
    let run = run_with(FixedSecret(42), &["42", "no"], None).await;

    assert_eq!(
        run.events,
        vec![
            "say:intro",
            "listen",
            "stop",
            "say:victory",
            "say:ask_replay",
            "listen",
            "stop",
            "say:farewell",
            "close",
        ]
    );
}

#[tokio::test]
async fn test_replay_plays_a_second_session() {
    let run = run_with(ScriptedSecret::new([42, 7]), &["42", "sí", "siete", "no"], None).await;

    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
    let cues: Vec<Cue> = run.spoken.iter().map(Message::cue).collect();
    assert_eq!(
        cues,
        vec![
            Cue::Intro,
            Cue::Victory,
            Cue::AskReplay,
            Cue::Acknowledge,
            Cue::Intro,
            Cue::Victory,
            Cue::AskReplay,
            Cue::Farewell,
        ]
    );
    assert_eq!(run.spoken[5], Message::Victory { secret: 7 });
}

#[tokio::test]
async fn test_defeat_then_decline() {
    let run = run_with(FixedSecret(99), &["1", "2", "3", "4", "5", "no"], None).await;

    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
    assert!(run.spoken.contains(&Message::Defeat { secret: 99 }));
    assert_eq!(run.spoken.last(), Some(&Message::Farewell));
}

#[tokio::test]
async fn test_ambiguous_replay_answer_asks_again() {
    let run = run_with(FixedSecret(42), &["42", "quizás", "no"], None).await;

    let asks = run
        .spoken
        .iter()
        .filter(|m| **m == Message::AskReplay)
        .count();
    assert_eq!(asks, 2);
    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
}

#[tokio::test(start_paused = true)]
async fn test_pauses_between_messages_and_before_exit() {
    let started = tokio::time::Instant::now();
    let run = run_paced(
        FixedSecret(42),
        &["42", "no"],
        None,
        Duration::from_millis(500),
        Duration::from_secs(1),
    )
    .await;

    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
    // intro, victory, ask_replay and farewell each pause, then the exit delay.
    assert_eq!(run.spoken.len(), 4);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(3), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(3500), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_no_pauses_by_default() {
    let started = tokio::time::Instant::now();
    let run = run_with(FixedSecret(42), &["42", "no"], None).await;

    assert_eq!(run.exit.unwrap(), HostExit::Terminated);
    assert!(started.elapsed() < Duration::from_millis(100));
}

// =========================================================================
// Exits and failures
// =========================================================================

#[tokio::test]
async fn test_input_closed_mid_game() {
    let run = run_with(FixedSecret(42), &["cincuenta"], None).await;

    assert_eq!(run.exit.unwrap(), HostExit::InputClosed);
    assert_eq!(run.spoken.len(), 2);
    assert!(!run.events.contains(&"close".to_string()));
}

#[tokio::test]
async fn test_actor_is_shut_down_after_run() {
    let run = run_with(FixedSecret(42), &["42", "no"], None).await;
    assert!(run.exit.is_ok());
    assert!(matches!(
        run.handle.info().await,
        Err(AdivinaError::Unavailable)
    ));
}

#[tokio::test]
async fn test_voice_failure_propagates() {
    let run = run_with(FixedSecret(42), &["50"], Some(Cue::Lower)).await;

    assert!(matches!(
        run.exit,
        Err(AdivinaError::Speech(SpeechError::Closed))
    ));
}

// =========================================================================
// Real adapters
// =========================================================================

#[tokio::test]
async fn test_console_game() {
    use tokio::io::AsyncReadExt;

    let input: &[u8] = b"cincuenta\n\ncuarenta y dos\nno\n";
    let (writer, mut reader) = tokio::io::duplex(64 * 1024);

    let handle = spawn_game(GuessGame::with_source(GameConfig::default(), FixedSecret(42)), 4);
    let host = Host::new(handle, ConsoleRecognizer::new(input), ConsoleVoice::new(writer));
    assert_eq!(host.run().await.unwrap(), HostExit::Terminated);

    let mut out = String::new();
    reader.read_to_string(&mut out).await.unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("He elegido un número entre 0 y 100"));
    assert_eq!(lines[1], "Menor. Te quedan 4 intentos restantes.");
    assert!(lines[2].starts_with("No he entendido"));
    assert_eq!(lines[3], "¡Correcto! Has adivinado el número 42.");
    assert!(lines[4].starts_with("¿Quieres jugar otra vez?"));
    assert_eq!(lines[5], "Gracias por jugar. Hasta pronto.");
}

#[cfg(feature = "websocket")]
#[tokio::test]
async fn test_remote_front_end_game() {
    use adivina::speech::Frame;
    use futures_util::{SinkExt, StreamExt};
    use tokio_tungstenite::tungstenite::Message as WsMessage;

    let server = SpeechServer::bind("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap();
    let accept = tokio::spawn(async move { server.accept().await.unwrap() });
    let (mut client, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
        .await
        .unwrap();
    let (recognizer, voice) = accept.await.unwrap().split();

    let handle = spawn_game(GuessGame::with_source(GameConfig::default(), FixedSecret(42)), 4);
    let host = Host::new(handle, recognizer, voice);

    // Plays the browser: acknowledges speech, answers each listen.
    let front_end = async move {
        let mut answers = VecDeque::from(["cuarenta y dos", "no"]);
        let mut heard = Vec::new();
        while let Some(Ok(msg)) = client.next().await {
            let WsMessage::Text(text) = msg else { continue };
            let reply = match Frame::decode(&text).unwrap() {
                Frame::Speak { cue, .. } => {
                    heard.push(cue);
                    Frame::PlaybackFinished
                }
                Frame::StartListening => match answers.pop_front() {
                    Some(text) => Frame::Recognized { text: text.into() },
                    None => continue,
                },
                Frame::Terminate => break,
                _ => continue,
            };
            let json = reply.encode().unwrap();
            client.send(WsMessage::Text(json.into())).await.unwrap();
        }
        heard
    };

    let (exit, heard) = tokio::join!(host.run(), front_end);
    assert_eq!(exit.unwrap(), HostExit::Terminated);
    assert_eq!(
        heard,
        vec![Cue::Intro, Cue::Victory, Cue::AskReplay, Cue::Farewell]
    );
}
