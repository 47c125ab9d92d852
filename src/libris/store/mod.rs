//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the catalog lives. A store only knows how to
//! read the whole collection and overwrite it; ordering, id assignment and search belong
//! to [`crate::library::Library`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   - Path is given at construction; the store has no default location
//!   - Parent directory is created on first save
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the serialized form, so load/save go through serde like the file store
//!   - Counts saves, so tests can assert that a failed operation wrote nothing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "title": "Мастер и Маргарита",
//!         "author": "М. Булгаков",
//!         "year": "1967",
//!         "status": "available"
//!     }
//! ]
//! ```
//!
//! Pretty-printed with 4-space indentation, non-ASCII written literally.

use crate::error::Result;
use crate::model::Book;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
///
/// Writes are whole-collection: every `save` replaces what was there before.
pub trait DataStore {
    /// Load every persisted book, in stored order. Nothing persisted yet is an empty list.
    fn load(&self) -> Result<Vec<Book>>;

    /// Overwrite the persisted collection.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human-readable location, for messages and logs.
    fn location(&self) -> String;
}

pub(crate) fn to_pretty_json(books: &[Book]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_json_uses_four_spaces_and_literal_unicode() {
        let books = vec![Book::new(
            1,
            "Война и мир".into(),
            "Толстой".into(),
            "1869".into(),
        )];
        let text = String::from_utf8(to_pretty_json(&books).unwrap()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": 1,"));
        assert!(text.contains("\"title\": \"Война и мир\""));
        assert!(text.ends_with("}\n]"));
    }

    #[test]
    fn empty_collection_is_empty_array() {
        let text = String::from_utf8(to_pretty_json(&[]).unwrap()).unwrap();
        assert_eq!(text, "[]");
    }
}
