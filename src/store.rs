//! In-memory record store shared by every request.
//!
//! Both sequences live behind a single lock, so appends are serialized and
//! the length-based author id can never be handed out twice.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;

use crate::datamodel::{SEED_AUTHORS, SEED_BOOKS};
use crate::error::StoreError;

/// Number of decimal digits in a generated book id.
pub const BOOK_ID_LEN: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: i32,
}

#[derive(Debug, Default)]
struct Records {
    authors: Vec<Author>,
    books: Vec<Book>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    inner: Arc<RwLock<Records>>,
}

impl RecordStore {
    /// Creates a store holding the built-in catalogue.
    pub fn seeded() -> Self {
        let records = Records {
            authors: SEED_AUTHORS
                .iter()
                .map(|a| Author {
                    id: a.id,
                    name: a.name.into(),
                })
                .collect(),
            books: SEED_BOOKS
                .iter()
                .map(|b| Book {
                    id: b.id.into(),
                    title: b.title.into(),
                    author_id: b.author_id,
                })
                .collect(),
        };
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    pub fn authors(&self) -> Vec<Author> {
        self.inner.read().authors.clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.inner.read().books.clone()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.inner
            .read()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    pub fn book(&self, id: &str) -> Option<Book> {
        self.inner
            .read()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Looks up several authors at once. Only the first author with a given
    /// id is returned, and ids without an author are absent from the map.
    pub fn authors_by_ids(&self, ids: &[i32]) -> HashMap<i32, Author> {
        let records = self.inner.read();
        let mut found = HashMap::with_capacity(ids.len());
        for author in &records.authors {
            if ids.contains(&author.id) {
                found.entry(author.id).or_insert_with(|| author.clone());
            }
        }
        found
    }

    /// Groups the books written by each of `author_ids`, keeping insertion
    /// order within each group. Every requested id gets an entry.
    pub fn books_by_authors(&self, author_ids: &[i32]) -> HashMap<i32, Vec<Book>> {
        let records = self.inner.read();
        let mut books: HashMap<i32, Vec<Book>> = author_ids
            .iter()
            .map(|id| (*id, Vec::new()))
            .collect();
        for book in &records.books {
            if let Some(group) = books.get_mut(&book.author_id) {
                group.push(book.clone());
            }
        }
        books
    }

    pub fn add_author(&self, name: String) -> Result<Author, StoreError> {
        let mut records = self.inner.write();
        let author = Author {
            id: next_author_id(records.authors.len())?,
            name,
        };
        records.authors.push(author.clone());
        tracing::debug!(id = author.id, "appended author");
        Ok(author)
    }

    /// Appends a book under a freshly drawn id. The author id is stored as
    /// given, whether or not such an author exists.
    pub fn add_book(&self, title: String, author_id: i32) -> Book {
        let mut records = self.inner.write();
        let id = loop {
            let candidate = random_book_id();
            if !records.books.iter().any(|book| book.id == candidate) {
                break candidate;
            }
            tracing::debug!(id = %candidate, "book id collision, drawing again");
        };
        let book = Book {
            id,
            title,
            author_id,
        };
        records.books.push(book.clone());
        tracing::debug!(id = %book.id, author_id, "appended book");
        book
    }
}

/// Author ids are `count + 1` and must fit an `Int`.
fn next_author_id(count: usize) -> Result<i32, StoreError> {
    i32::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or(StoreError::AuthorIdsExhausted)
}

fn random_book_id() -> String {
    let mut rng = rand::thread_rng();
    (0..BOOK_ID_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
