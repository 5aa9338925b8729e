use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::engine::Engine;
use crate::core::game::Game;
use crate::core::script::run_script;
use crate::games::play_nine::{PlayNineGame, PlayNineRenderer};
use crate::logging::{self, LogTarget};

#[derive(Parser)]
#[command(name = "play-nine")]
#[command(about = "★ Pick digits that add up to the stars, until all nine are used")]
#[command(version)]
pub struct Cli {
    /// Seed for the star generator, for repeatable games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log file for interactive play (defaults to play-nine.log in the temp directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Read commands from stdin and print a JSON snapshot after each one
    Script,
}

impl Cli {
    /// Default log level, overridden by RUST_LOG
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("play-nine.log"))
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            logging::init(LogTarget::File(cli.log_path()), cli.log_level())?;
            let game = PlayNineGame::new(cli.seed);

            let mut terminal = ratatui::init();
            let result = Engine::<_, PlayNineRenderer>::new(game).run(&mut terminal);
            ratatui::restore();

            let game = result?;
            info!(outcome = ?game.state().outcome(), "session finished");
        }
        Commands::Script => {
            logging::init(LogTarget::Stderr, cli.log_level())?;
            let mut game = PlayNineGame::new(cli.seed);
            run_script(&mut game, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
