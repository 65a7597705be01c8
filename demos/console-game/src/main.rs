use std::path::PathBuf;

use adivina::prelude::*;
use clap::Parser;

/// Guess the number, in Spanish.
///
/// Type your guesses ("cuarenta y dos", "42") or connect a speech front-end
/// with `--websocket`.
#[derive(Debug, Parser)]
#[command(name = "adivina", version)]
struct Args {
    /// JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve a remote speech front-end on this address instead of the console.
    #[arg(long, value_name = "ADDR")]
    websocket: Option<String>,

    /// Seed for reproducible secrets. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Prefix each console line with its cue.
    #[arg(long)]
    cues: bool,
}

impl Args {
    fn host_config(&self) -> Result<HostConfig, AdivinaError> {
        let mut config = match &self.config {
            Some(path) => HostConfig::from_json_file(path)?,
            None => HostConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();
    let config = args.host_config()?;
    let game = spawn_game(config.build_game(), config.channel_size);

    let exit = match &args.websocket {
        Some(addr) => {
            let server = SpeechServer::bind(addr).await?;
            eprintln!("waiting for a speech front-end on ws://{}", server.local_addr()?);
            let (recognizer, voice) = server.accept().await?.split();
            Host::new(game, recognizer, voice)
                .with_pauses(config.pause_between_messages(), config.exit_delay())
                .run()
                .await?
        }
        None => {
            let voice = ConsoleVoice::stdout().with_cues(args.cues);
            Host::new(game, ConsoleRecognizer::stdin(), voice)
                .with_pauses(config.pause_between_messages(), config.exit_delay())
                .run()
                .await?
        }
    };

    tracing::debug!(?exit, "exiting");
    Ok(())
}
