use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cardfile")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Plain-text note cards, one file per card", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the cards (overrides CARDFILE_DIR and config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new card
    #[command(alias = "n")]
    New {
        /// Card content; read from stdin when omitted or "-"
        content: Option<String>,
    },

    /// List cards, most recently updated first
    #[command(alias = "ls")]
    List {
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a card's content
    #[command(alias = "v")]
    Show {
        /// Card id
        id: String,
    },

    /// Replace a card's content
    #[command(alias = "e")]
    Edit {
        /// Card id
        id: String,

        /// New content; read from stdin when omitted or "-"
        content: Option<String>,
    },

    /// Delete a card
    #[command(alias = "rm")]
    Delete {
        /// Card id
        id: String,
    },

    /// Print the cards directory, or the file holding a card
    Path {
        /// Card id
        id: Option<String>,
    },
}
