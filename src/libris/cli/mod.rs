//! # Shell
//!
//! One possible client of the libris API: one-shot subcommands plus an interactive menu.
//!
//! This is the only place in the codebase that:
//! - Parses arguments and reads from stdin
//! - Writes to stdout/stderr and sets the exit code
//! - Decides how books and messages look on screen
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-subcommand handlers
//! - `menu`: the interactive loop and its post-action wrapper
//! - `print`: output formatting shared by both modes

pub mod commands;
pub mod menu;
pub mod print;
pub mod setup;
