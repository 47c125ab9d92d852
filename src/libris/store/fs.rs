use super::{to_pretty_json, DataStore};
use crate::error::{LibrisError, Result};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibrisError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            log::debug!("no data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).map_err(LibrisError::Io)?;
        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(|source| LibrisError::MalformedData {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(books)?;
        fs::write(&self.path, content).map_err(LibrisError::Io)?;
        log::debug!("saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
