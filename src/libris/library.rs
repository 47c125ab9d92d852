//! # The Catalog
//!
//! [`Library`] owns the ordered collection of [`Book`]s for one session. It is loaded in
//! full when opened and written back in full after every mutation, so the data file always
//! reflects the last successful operation.
//!
//! Ids are assigned as `max(existing) + 1`. Removing the highest-id book therefore frees
//! its id for the next `add`; gaps below the maximum are never filled.

use crate::error::{LibrisError, Result};
use crate::model::{Book, BookStatus};
use crate::store::DataStore;

pub struct Library<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> Library<S> {
    /// Load the persisted collection from `store`. Malformed data is an error, never a
    /// partial load.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        log::debug!("opened library at {} ({} books)", store.location(), books.len());
        Ok(Self { store, books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, title: String, author: String, year: String) -> Result<Book> {
        let id = self.next_id()?;
        let book = Book::new(id, title, author, year);
        self.books.push(book.clone());
        self.persist()?;
        log::info!("added book {}: {}", book.id, book.title);
        Ok(book)
    }

    pub fn remove(&mut self, id: u64) -> Result<Book> {
        let pos = self.position(id)?;
        let book = self.books.remove(pos);
        self.persist()?;
        log::info!("removed book {}: {}", book.id, book.title);
        Ok(book)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Every book whose title or author contains `keyword` (ignoring case), or whose year
    /// equals it exactly. Collection order is kept.
    pub fn search(&self, keyword: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.matches(keyword))
            .cloned()
            .collect()
    }

    /// Set the status of a book. Setting the status it already has still persists.
    pub fn change_status(&mut self, id: u64, status: BookStatus) -> Result<Book> {
        let pos = self.position(id)?;
        self.books[pos].status = status;
        self.persist()?;
        let book = self.books[pos].clone();
        log::info!("book {} is now {}", book.id, book.status);
        Ok(book)
    }

    fn next_id(&self) -> Result<u64> {
        let max = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(LibrisError::IdsExhausted(max))
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| {
                log::warn!("no book with id {}", id);
                LibrisError::NotFound(id)
            })
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.books)
    }
}
