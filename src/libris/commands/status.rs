use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::BookStatus;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    library: &mut Library<S>,
    id: u64,
    status: BookStatus,
) -> Result<CmdResult> {
    let book = library.change_status(id, status)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status of '{}' changed to '{}'",
        book.title, book.status
    )));
    Ok(result.with_affected_books(vec![book]))
}
