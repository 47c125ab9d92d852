use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::model::Book;
use std::io::{self, Write};

pub const EMPTY_LIBRARY: &str = "The library is empty";

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{}", EMPTY_LIBRARY);
    }
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}
