//! Thridle - CLI
//!
//! Three-round word puzzle with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use thridle::{
    commands::{check_guess, run_simple},
    config::Settings,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::print_check_result,
    services::DictionaryApi,
};
use tokio::runtime::{Builder, Runtime};

#[derive(Parser)]
#[command(
    name = "thridle",
    about = "Three five-letter words, one letter given away in each",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary API used to validate guesses
    #[arg(long, global = true, env = "THRIDLE_DICTIONARY_URL", default_value = DictionaryApi::DEFAULT_URL)]
    dictionary_url: String,

    /// Remote puzzle generator (default: pick words from the local list)
    #[arg(long, global = true, env = "THRIDLE_GENERATOR_URL")]
    generator_url: Option<String>,

    /// Validate guesses against the word list instead of the dictionary API
    #[arg(long, global = true, env = "THRIDLE_OFFLINE")]
    offline: bool,

    /// Word list file for offline play (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the TUI logs nothing otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback a guess would get
    Check {
        /// The hidden word
        target: String,

        /// Revealed slot, 1 to 5
        revealed: usize,

        /// The guess to evaluate
        guess: String,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            dictionary_url: self.dictionary_url.clone(),
            generator_url: self.generator_url.clone(),
            offline: self.offline,
            wordlist: self.wordlist.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, None | Some(Commands::Play)) => LogTarget::Off,
            (None, Some(_)) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_target())?;
    let settings = cli.settings();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple_command(&settings),
        Commands::Check {
            target,
            revealed,
            guess,
        } => {
            let result = check_guess(&target, revealed, &guess)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn runtime() -> Result<Runtime> {
    Ok(Builder::new_multi_thread().enable_all().build()?)
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    let services = settings.services()?;
    let runtime = runtime()?;
    run_simple(&runtime, &services)
}

fn run_play_command(settings: &Settings) -> Result<()> {
    let services = settings.services()?;
    let runtime = runtime()?;

    let app = App::new(runtime.handle().clone(), services);
    run_tui(app)
}
