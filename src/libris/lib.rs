//! # Libris Architecture
//!
//! Libris is a small book catalog: add, remove, search, list and check books in and out,
//! with the whole collection kept in one JSON file. The library crate holds all of the
//! logic; the `libris` binary is a thin shell over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Subcommands and the interactive menu                     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses raw input (id text, status text)                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (library.rs) over Storage (store/)                 │
//! │  - Ordered collection, id assignment, full rewrite on change│
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! The only I/O is the data file, behind [`store::DataStore`].
//!
//! ## Where the data lives
//!
//! [`store::fs::FileStore`] takes its path as a constructor argument. Choosing that path
//! (flag, environment, config file, platform default) is [`config`]'s job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`library`]: The in-memory catalog and its invariants
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookStatus`)
//! - [`config`]: Configuration and data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
