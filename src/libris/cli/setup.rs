use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version, about = "A small, local book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides LIBRIS_FILE and the config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        year: String,
    },

    /// Remove a book by id
    #[command(alias = "rm")]
    Remove { id: String },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Search by title, author (substring) or year (exact)
    Search { keyword: String },

    /// Change the status of a book (available or checked_out)
    Status { id: String, status: String },

    /// Interactive menu (default)
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
