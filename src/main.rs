use anyhow::{Context, Result};
use clap::Parser;
use math_quest::effects::{GameEnv, GameMachine, Summary};
use math_quest::game::{GameMode, OperationMode, Session};
use math_quest::random::SeededRandom;
use math_quest::shell::{self, Command};
use math_quest::GameConfig;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "math-quest")]
#[command(about = "Addition and subtraction practice with stories and jokes")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// story, joke or practice
    #[arg(long)]
    game_mode: Option<GameMode>,

    /// addition, subtraction or mixed
    #[arg(long)]
    operation: Option<OperationMode>,

    /// Print one JSON snapshot per line instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level for stderr output
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(mode) = self.game_mode {
            config.game_mode = mode;
        }
        if let Some(mode) = self.operation {
            config.operation_mode = mode;
        }
        Ok(config.validated()?)
    }
}

fn show(machine: &GameMachine, json: bool) -> Result<()> {
    let snapshot = machine.snapshot();
    if json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("\n{}", shell::render_snapshot(&snapshot));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config().context("could not load configuration")?;
    let mut rng = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    let session = Session::with_modes(config.game_mode, config.operation_mode, &mut rng);
    info!(session = %session.id(), seed = ?config.seed, "starting game");

    let env = GameEnv::new(rng);
    let mut machine = GameMachine::new(session);

    if !cli.json {
        println!("🌟 Math Quest! 🌟  (type 'help' for commands)");
    }
    show(&machine, cli.json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let intent = match shell::parse_command(&line, &config) {
            Ok(Command::Play(intent)) => intent,
            Ok(Command::Help) => {
                println!("{}", shell::HELP);
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match machine.dispatch(intent, &env).await {
            Ok(result) => {
                show(&machine, cli.json)?;
                if let Some(note) = shell::render_step(&result).filter(|_| !cli.json) {
                    println!("{note}");
                }
            }
            Err(e) => eprintln!("{}", shell::render_error(&e)),
        }
    }

    let summary = Summary::of(&machine);
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("\nThanks for playing!\n{summary}");
    }
    Ok(())
}
