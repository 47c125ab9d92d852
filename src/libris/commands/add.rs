use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    library: &mut Library<S>,
    title: String,
    author: String,
    year: String,
) -> Result<CmdResult> {
    let book = library.add(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book '{}' added with id {}",
        book.title, book.id
    )));
    Ok(result.with_affected_books(vec![book]))
}
