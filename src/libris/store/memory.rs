use super::{to_pretty_json, DataStore};
use crate::error::{LibrisError, Result};
use crate::model::Book;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    data: Option<Vec<u8>>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw serialized content, as if read from disk.
    pub fn with_raw(content: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(content.into()),
            ..Self::default()
        }
    }

    /// Make every later `save` fail with an IO error, leaving stored content as is.
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The last saved content, if any.
    pub fn raw(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        match &self.data {
            None => Ok(Vec::new()),
            Some(bytes) => {
                serde_json::from_slice(bytes).map_err(|source| LibrisError::MalformedData {
                    path: PathBuf::from(self.location()),
                    source,
                })
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(LibrisError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.data = Some(to_pretty_json(books)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        ":memory:".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookStatus;

    /// Two books with a gap in the ids, the second one checked out.
    pub fn sample_books() -> Vec<Book> {
        let mut second = Book::new(
            3,
            "TEST_TITLE_02".into(),
            "TEST_AUTHOR_02".into(),
            "2001".into(),
        );
        second.status = BookStatus::CheckedOut;
        vec![
            Book::new(
                1,
                "TEST_TITLE_01".into(),
                "TEST_AUTHOR_01".into(),
                "2000".into(),
            ),
            second,
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persist `books` and reset the save counter.
        pub fn with_books(mut self, books: &[Book]) -> Self {
            self.store.save(books).unwrap();
            self.store.saves = 0;
            self
        }

        pub fn with_sample_books(self) -> Self {
            self.with_books(&sample_books())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_books, StoreFixture};
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        assert!(InMemoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn counts_saves() {
        let mut store = InMemoryStore::new();
        store.save(&sample_books()).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.saves(), 2);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn fixture_does_not_count_seeding() {
        let fixture = StoreFixture::new().with_sample_books();
        assert_eq!(fixture.store.saves(), 0);
        assert_eq!(fixture.store.load().unwrap(), sample_books());
    }

    #[test]
    fn failing_saves_keep_previous_content() {
        let mut store = StoreFixture::new()
            .with_sample_books()
            .store
            .with_failing_saves();
        assert!(matches!(store.save(&[]), Err(LibrisError::Io(_))));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.load().unwrap(), sample_books());
    }

    #[test]
    fn raw_garbage_is_malformed() {
        let store = InMemoryStore::with_raw("not json");
        assert!(matches!(
            store.load(),
            Err(LibrisError::MalformedData { .. })
        ));
    }
}
