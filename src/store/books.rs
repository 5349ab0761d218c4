//! In-memory book collection.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publisher_date: String,
    pub page_count: u32,
    pub language: String,
}

/// Payload for creating a book. The id is assigned by the store; an `id`
/// field in the request body is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDraft {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publisher_date: String,
    pub page_count: u32,
    pub language: String,
}

impl BookDraft {
    fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publisher_date: self.publisher_date,
            page_count: self.page_count,
            language: self.language,
        }
    }
}

/// Partial update payload. Supplied fields replace the stored ones; an `id`
/// field in the body is accepted and ignored; the path id always wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub publisher_date: Option<String>,
    pub page_count: Option<u32>,
    pub language: Option<String>,
}

impl BookPatch {
    fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(publisher_date) = self.publisher_date {
            book.publisher_date = publisher_date;
        }
        if let Some(page_count) = self.page_count {
            book.page_count = page_count;
        }
        if let Some(language) = self.language {
            book.language = language;
        }
    }
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Book with id {id} not found")]
    NotFound { id: u64 },
}

/// Mutex-guarded book collection.
///
/// All mutations go through the internal lock, so concurrent handlers never
/// interleave a stale max-id read with an append, or a stale index lookup
/// with a removal.
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// Create a store pre-loaded with the canonical demo records (ids 1-3).
    pub fn seed() -> Self {
        let books = vec![
            Book {
                id: 1,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                publisher: "Secker & Warburg".to_string(),
                publisher_date: "1949-06-08".to_string(),
                page_count: 328,
                language: "English".to_string(),
            },
            Book {
                id: 2,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
                publisher: "J.B. Lippincott & Co.".to_string(),
                publisher_date: "1960-07-11".to_string(),
                page_count: 281,
                language: "English".to_string(),
            },
            Book {
                id: 3,
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
                publisher: "Charles Scribner's Sons".to_string(),
                publisher_date: "1925-04-10".to_string(),
                page_count: 180,
                language: "English".to_string(),
            },
        ];
        Self {
            books: Mutex::new(books),
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.books.lock().clone()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Result<Book, StoreError> {
        self.books
            .lock()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Append a new record. The id is `max(existing) + 1`, or 1 when empty,
    /// computed against live state under the lock. Deleting the current max
    /// frees its id for the next create; that reuse is intended behavior.
    pub fn create(&self, draft: BookDraft) -> Book {
        let mut books = self.books.lock();
        let id = books.iter().map(|book| book.id).max().map_or(1, |max| max + 1);
        let book = draft.into_book(id);
        books.push(book.clone());
        book
    }

    /// Merge the patch over the record with the given id. The stored id is
    /// forced back to `id` regardless of the payload.
    pub fn update(&self, id: u64, patch: BookPatch) -> Result<Book, StoreError> {
        let mut books = self.books.lock();
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound { id })?;
        patch.apply(book);
        book.id = id;
        Ok(book.clone())
    }

    /// Remove the record with the given id.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut books = self.books.lock();
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound { id })?;
        books.remove(index);
        Ok(())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
