//! CLI frontend for the Arcanum tarot reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcanum",
    about = "Arcanum — a deterministic tarot reading engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a spread for a question
    Draw {
        /// The question to draw for
        question: String,

        /// Number of cards to draw
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Draw, narrate, format, and cache a full reading
    Read {
        /// The question to read for
        question: String,

        /// Number of cards to draw
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Locale code for length bounds and the conclusion prefix
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Session store file
        #[arg(short, long, default_value = "arcanum-sessions.json")]
        store: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Mark the reward gate unlocked for a question's reading
    Unlock {
        /// The question whose reading unlocks
        question: String,

        /// Number of cards in the reading's spread
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Session store file
        #[arg(short, long, default_value = "arcanum-sessions.json")]
        store: PathBuf,
    },

    /// List the 78-card catalog
    Deck,

    /// List cached reading sessions
    Sessions {
        /// Session store file
        #[arg(short, long, default_value = "arcanum-sessions.json")]
        store: PathBuf,
    },

    /// Remove expired sessions from the store
    Purge {
        /// Session store file
        #[arg(short, long, default_value = "arcanum-sessions.json")]
        store: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            question,
            count,
            json,
        } => commands::draw::run(&question, count, json),
        Commands::Read {
            question,
            count,
            locale,
            store,
            json,
        } => commands::read::run(&question, count, &locale, &store, json),
        Commands::Unlock {
            question,
            count,
            store,
        } => commands::unlock::run(&question, count, &store),
        Commands::Deck => commands::deck::run(),
        Commands::Sessions { store } => commands::sessions::run(&store),
        Commands::Purge { store } => commands::purge::run(&store),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
