use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>, keyword: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(library.search(keyword)))
}
