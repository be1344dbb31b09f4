use std::path::PathBuf;

use clap::Parser;
use goose::{DiceRoller, SeededDice, SystemDice};
use goose_game::{Config, GameSession, ReaderSource, Recorder, WriterSink};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays the Goose Game, one command per line on stdin.
#[derive(Parser)]
struct Args {
    /// RNG seed for dice that are rolled automatically
    #[arg(long)]
    seed: Option<u64>,

    /// Record the commands and responses of the session into this JSON file
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let dice: Box<dyn DiceRoller> = match args.seed {
        Some(seed) => {
            info!(seed, "Using seeded dice");
            Box::new(SeededDice::new(seed))
        }
        None => Box::new(SystemDice),
    };
    let recorder = args.record.map(Recorder::new).transpose()?;

    let mut session = GameSession::new(
        Config { dice, recorder },
        ReaderSource::new(std::io::stdin().lock()),
        WriterSink::new(std::io::stdout().lock()),
    );
    let exit_code = session.run()?;
    std::process::exit(exit_code)
}

// Logs go to stderr, stdout is for the game.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
