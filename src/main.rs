//! Boggle Engine - CLI
//!
//! Board path finder and round resolver with TUI and CLI modes.

use anyhow::Result;
use boggle_engine::{
    commands::{resolve_round, run_benchmark, run_simple, trace_word},
    core::DiceSet,
    dictionary::loader::load_dictionary,
    output::{print_benchmark_result, print_board, print_round_report, print_trace_result},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    name = "boggle_engine",
    about = "Boggle board path finder and round resolver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for rolling boards (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI practice board (default)
    Play,

    /// Simple hot-seat game in the terminal
    Simple {
        /// Player names
        #[arg(required = true)]
        players: Vec<String>,
    },

    /// Roll and print a random board
    Roll,

    /// Trace a word on a board
    Trace {
        /// Board letters, e.g. "CATSDOGEQUITERAIN" or "c a t s d o g e ..."
        board: String,

        /// Word to trace
        word: String,
    },

    /// Resolve a round from player submissions
    Resolve {
        /// Board letters
        board: String,

        /// Submissions as player=word,word,...
        #[arg(required = true)]
        submissions: Vec<String>,
    },

    /// Benchmark path search of the dictionary on random boards
    Benchmark {
        /// Number of boards to roll
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

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

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let dictionary = load_dictionary(&cli.dictionary)?;
    info!(words = dictionary.len(), source = %cli.dictionary, "dictionary loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use boggle_engine::interactive::{App, run_tui};

            let app = App::new(dictionary, seed);
            run_tui(app)
        }
        Commands::Simple { players } => {
            run_simple(&players, dictionary, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Roll => {
            let grid = DiceSet::standard().roll(&mut rng);
            print_board(&grid, None);
            println!("{}", grid.tiles().concat());
            Ok(())
        }
        Commands::Trace { board, word } => {
            let result = trace_word(&board, &word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_trace_result(&result);
            Ok(())
        }
        Commands::Resolve { board, submissions } => {
            let report =
                resolve_round(&board, &submissions, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_round_report(&report);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let words = dictionary.sorted_words();
            println!(
                "Running benchmark of {} words on {count} random boards...",
                words.len()
            );
            let result = run_benchmark(&DiceSet::standard(), &words, count, &mut rng, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
