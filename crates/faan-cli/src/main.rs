//! CLI score keeper for four-player faan sessions.

mod commands;
mod store;
mod telemetry;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use faan_core::ScoringVariation;

use crate::commands::new::NewArgs;
use crate::store::KvStore;

#[derive(Parser)]
#[command(
    name = "faan",
    about = "Score and seating keeper for four-player faan sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session store file
    #[arg(long, global = true, env = "FAAN_STORE", default_value = "faan.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session with four players in seat order
    New {
        /// Player names, seat 1 first (an empty name becomes "Player N")
        #[arg(num_args = 4, required = true, value_name = "NAME")]
        names: Vec<String>,

        /// Use shared-gun payouts for discard wins (default: full gun)
        #[arg(long)]
        half: bool,

        /// Randomise the seating order
        #[arg(long)]
        shuffle: bool,

        /// RNG seed for a reproducible shuffle
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,

        /// Replace an existing session
        #[arg(short, long)]
        force: bool,
    },

    /// Show scores, winds and the current dealer
    Status,

    /// Record a win
    Win {
        /// Winner: seat number (1-4) or player name. 1-4 always mean seats
        winner: String,

        /// Faan scored by the winning hand (0-13)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        faan: i32,

        /// Discarder for a discard win, as a seat or name (omit for self-drawn)
        #[arg(short, long, value_name = "PLAYER")]
        from: Option<String>,
    },

    /// Record a round with no winner
    Tie,

    /// Show the round history
    History {
        /// Output format: text, markdown, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Roll three dice to pick where the wall is broken
    Dice {
        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the faan-to-points table
    Table,

    /// Delete the current session
    Reset,
}

fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let store = KvStore::open(cli.store);

    let result = match cli.command {
        Commands::New {
            names,
            half,
            shuffle,
            seed,
            force,
        } => commands::new::run(
            &store,
            NewArgs {
                names: &names,
                variation: if half {
                    ScoringVariation::Half
                } else {
                    ScoringVariation::Full
                },
                shuffle,
                seed,
                force,
            },
        ),
        Commands::Status => commands::status::run(&store),
        Commands::Win {
            winner,
            faan,
            from,
        } => commands::win::run(&store, &winner, faan, from.as_deref()),
        Commands::Tie => commands::tie::run(&store),
        Commands::History { format } => commands::history::run(&store, &format),
        Commands::Dice { seed } => commands::dice::run(seed),
        Commands::Table => commands::table::run(),
        Commands::Reset => commands::reset::run(&store),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
