//! Chronos - CLI
//!
//! History year guessing game with TUI and CLI modes.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use chronos::{
    commands::{evaluate_pair, run_simple},
    config::{Config, default_save_dir},
    game::Session,
    output::{print_board, print_evaluation},
    storage::Store,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chronos",
    about = "Guess the year of a historical event from four hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON catalog to play instead of the built-in puzzles
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding the save slot
    #[arg(long, global = true, env = "CHRONOS_SAVE_DIR")]
    save_dir: Option<PathBuf>,

    /// Keep the round in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Start a new round and show it
    New,

    /// Show the current board
    Status,

    /// Start the puzzle of the day
    Daily {
        /// Day to play (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Score a guess against a target year
    Evaluate {
        /// The guessed year
        guess: String,

        /// The year to compare against
        target: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            catalog_path: self.catalog.clone(),
            save_dir: self.save_dir.clone().unwrap_or_else(default_save_dir),
            ephemeral: self.ephemeral,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        // Evaluation needs neither catalog nor save slot
        Commands::Evaluate { guess, target } => {
            let result = evaluate_pair(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Play => run_play_command(open_session(&cli)?),
        Commands::Simple => {
            let mut session = open_session(&cli)?;
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::New => {
            let mut session = open_session(&cli)?;
            print_board(session.start_round(), "");
            Ok(())
        }
        Commands::Status => {
            print_board(open_session(&cli)?.round(), "");
            Ok(())
        }
        Commands::Daily { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut session = open_session(&cli)?;
            print_board(session.start_daily(date), "");
            Ok(())
        }
    }
}

fn open_session(cli: &Cli) -> Result<Session<Box<dyn Store>>> {
    let config = cli.config();
    let catalog = config.load_catalog()?;
    Ok(Session::load_or_create(catalog, config.open_store()))
}

fn run_play_command<S: Store>(session: Session<S>) -> Result<()> {
    use chronos::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CHRONOS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
