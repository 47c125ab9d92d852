use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>, id: u64) -> Result<CmdResult> {
    let book = library.remove(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book '{}' removed", book.title)));
    Ok(result.with_affected_books(vec![book]))
}
