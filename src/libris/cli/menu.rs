//! Interactive menu.
//!
//! Each action runs through [`Menu::with_pause`]: clear the screen, run the action, then
//! wait for Enter before the menu is drawn again. Input mistakes and unknown ids are
//! shown as messages and the session goes on; anything else ends it.

use super::print::{write_books, write_messages};
use console::Term;
use libris::api::{CmdMessage, CmdResult, LibrisApi};
use libris::error::{LibrisError, Result};
use libris::store::DataStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Library
  1. Add a book
  2. Remove a book
  3. Search books
  4. List all books
  5. Change book status
  0. Exit";

const PAUSE_PROMPT: &str = "Press Enter to return to the main menu";

pub struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut LibrisApi<S>,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut LibrisApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each action.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let location = CmdMessage::info(format!("Catalog: {}", self.api.location()));
        write_messages(&mut self.output, &[location])?;
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let choice = match self.read_line("Choose an option: ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.trim() {
                "1" => self.with_pause(Self::add)?,
                "2" => self.with_pause(Self::remove)?,
                "3" => self.with_pause(Self::search)?,
                "4" => self.with_pause(Self::list)?,
                "5" => self.with_pause(Self::change_status)?,
                "0" => return Ok(()),
                other => {
                    let msg = CmdMessage::warning(format!("Unknown option: {}", other));
                    write_messages(&mut self.output, &[msg])?;
                }
            }
        }
    }

    /// Run `action` between a screen clear and a wait for Enter.
    fn with_pause<F>(&mut self, action: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.clear_screen {
            Term::stdout().clear_screen()?;
        }
        match action(self) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                write_messages(&mut self.output, &[CmdMessage::error(e.to_string())])?;
            }
            Err(e) => return Err(e),
        }
        writeln!(self.output)?;
        self.read_line(PAUSE_PROMPT)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let title = self.prompt("Enter the title: ")?;
        let author = self.prompt("Enter the author: ")?;
        let year = self.prompt("Enter the year of publication: ")?;
        let result = self.api.add_book(title, author, year)?;
        self.show(&result)
    }

    fn remove(&mut self) -> Result<()> {
        let id = self.prompt("Enter the id of the book to remove: ")?;
        let result = self.api.remove_book(&id)?;
        self.show(&result)
    }

    fn search(&mut self) -> Result<()> {
        let keyword = self.prompt("Enter a keyword (title, author or year): ")?;
        let result = self.api.search_books(&keyword)?;
        write_books(&mut self.output, &result.listed_books)?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_books()?;
        write_books(&mut self.output, &result.listed_books)?;
        Ok(())
    }

    fn change_status(&mut self) -> Result<()> {
        let id = self.prompt("Enter the id of the book: ")?;
        let status = self.prompt("Enter the new status ('available' or 'checked_out'): ")?;
        let result = self.api.change_status(&id, &status)?;
        self.show(&result)
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        write_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// A line the action cannot do without; end of input ends the session.
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.read_line(label)?.ok_or_else(|| {
            LibrisError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ))
        })
    }

    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
