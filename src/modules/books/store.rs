//! In-memory catalog store.
//!
//! The catalog is the only shared state in the application. A single mutex
//! serializes access so that every operation appears atomic to observers,
//! even under a multi-threaded runtime. Identifiers are assigned from a
//! monotonically increasing counter and are never reused, including after
//! deletion.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use super::models::{Book, BookId, CreateBook, UpdateBook};

/// Failure signals from catalog operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("book not found")]
    NotFound,
}

struct Catalog {
    books: Vec<Book>,
    next_id: BookId,
}

/// Mutex-guarded catalog of books plus the next-identifier counter.
pub struct BookStore {
    catalog: Mutex<Catalog>,
}

impl BookStore {
    /// Create a store over the given initial books. The id counter starts
    /// strictly above the largest seeded id.
    pub fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        Self {
            catalog: Mutex::new(Catalog { books, next_id }),
        }
    }

    /// Create a store with the fixed startup seed.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        // Operations never panic while holding the lock, so poisoning
        // cannot occur in practice.
        self.catalog.lock().expect("catalog mutex poisoned")
    }

    /// Full ordered sequence of books, insertion order preserved.
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// Look up a book by exact id.
    pub fn get(&self, id: BookId) -> Result<Book, StoreError> {
        self.lock()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new book with the next identifier. Never rejects: field
    /// presence is the caller's policy, not the store's.
    pub fn create(&self, fields: CreateBook) -> Book {
        let mut catalog = self.lock();
        let book = Book {
            id: catalog.next_id,
            title: fields.title,
            author: fields.author,
            genre: fields.genre,
            copies_available: fields.copies_available,
        };
        catalog.next_id += 1;
        catalog.books.push(book.clone());
        book
    }

    /// Merge supplied fields into an existing book. Fields absent from the
    /// patch keep their prior values; an empty patch is a no-op.
    pub fn update(&self, id: BookId, patch: UpdateBook) -> Result<Book, StoreError> {
        let mut catalog = self.lock();
        let book = catalog
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(genre) = patch.genre {
            book.genre = Some(genre);
        }
        if let Some(copies_available) = patch.copies_available {
            book.copies_available = Some(copies_available);
        }

        Ok(book.clone())
    }

    /// Remove a book, returning its data for confirmation. The removed id is
    /// never assigned again.
    pub fn delete(&self, id: BookId) -> Result<Book, StoreError> {
        let mut catalog = self.lock();
        let position = catalog
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(catalog.books.remove(position))
    }
}

/// Fixed startup catalog: three books with ids 1..=3.
fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: Some("Fiction".to_string()),
            copies_available: Some(4),
        },
        Book {
            id: 2,
            title: "Brave New World".to_string(),
            author: "Aldous Huxley".to_string(),
            genre: Some("Science Fiction".to_string()),
            copies_available: Some(2),
        },
        Book {
            id: 3,
            title: "Animal Farm".to_string(),
            author: "George Orwell".to_string(),
            genre: Some("Political Satire".to_string()),
            copies_available: Some(6),
        },
    ]
}
