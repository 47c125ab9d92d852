//! # API Facade
//!
//! The single entry point for UI clients. It takes input the way a shell collects it
//! (raw strings) and turns it into typed arguments before anything touches the catalog:
//!
//! - id text must parse as an integer, else [`LibrisError::InvalidId`]
//! - status text must name a known status, else [`LibrisError::InvalidStatus`]
//!
//! Both checks run before the library is consulted, so a rejected input never causes a
//! write. Business logic stays in `commands/*.rs`; the facade returns [`CmdResult`]s and
//! never prints.

use crate::commands;
use crate::error::{LibrisError, Result};
use crate::library::Library;
use crate::model::BookStatus;
use crate::store::DataStore;

pub struct LibrisApi<S: DataStore> {
    library: Library<S>,
}

impl<S: DataStore> LibrisApi<S> {
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            library: Library::open(store)?,
        })
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, title, author, year)
    }

    pub fn remove_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::remove::run(&mut self.library, id)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn search_books(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, keyword)
    }

    pub fn change_status(&mut self, id: &str, status: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        let status: BookStatus = status.parse()?;
        commands::status::run(&mut self.library, id, status)
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn location(&self) -> String {
        self.library.store().location()
    }
}

fn parse_id(input: &str) -> Result<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| LibrisError::InvalidId(input.to_string()))
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
