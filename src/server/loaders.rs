use std::collections::HashMap;
use std::convert::Infallible;

use async_graphql::dataloader::{DataLoader, Loader};
use async_graphql::{Context, Request};

use crate::error::StoreError;
use crate::store::RecordStore;

use super::schema::{Author, Book};

/// Batched access to the cross-references between authors and books.
pub trait Loaders {
    async fn load_books(&self, author_id: i32) -> async_graphql::Result<Vec<Book>>;
    async fn load_author(&self, author_id: i32) -> async_graphql::Result<Author>;
    async fn load_authors(
        &self,
        author_ids: Vec<i32>,
    ) -> async_graphql::Result<HashMap<i32, Author>>;
}

impl Loaders for Context<'_> {
    async fn load_books(&self, author_id: i32) -> async_graphql::Result<Vec<Book>> {
        let books = self
            .data::<DataLoader<LoadBooks>>()?
            .load_one(author_id)
            .await?;
        Ok(books.unwrap_or_default())
    }

    async fn load_author(&self, author_id: i32) -> async_graphql::Result<Author> {
        self.data::<DataLoader<LoadAuthors>>()?
            .load_one(author_id)
            .await?
            .ok_or_else(|| StoreError::AuthorNotFound(author_id).into())
    }

    async fn load_authors(
        &self,
        author_ids: Vec<i32>,
    ) -> async_graphql::Result<HashMap<i32, Author>> {
        Ok(self
            .data::<DataLoader<LoadAuthors>>()?
            .load_many(author_ids)
            .await?)
    }
}

/// Attaches a fresh set of loaders to a single request.
pub fn attach(req: Request, store: &RecordStore) -> Request {
    req.data(DataLoader::new(LoadBooks(store.clone()), tokio::spawn))
        .data(DataLoader::new(LoadAuthors(store.clone()), tokio::spawn))
}

/// Loads every book written by each requested author.
pub struct LoadBooks(RecordStore);

impl Loader<i32> for LoadBooks {
    type Value = Vec<Book>;
    type Error = Infallible;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        tracing::debug!(?keys, "resolving books by author");
        let books = self
            .0
            .books_by_authors(keys)
            .into_iter()
            .map(|(id, books)| (id, books.into_iter().map(Book::from).collect()))
            .collect();
        Ok(books)
    }
}

/// Loads authors by id; ids without an author are left out.
pub struct LoadAuthors(RecordStore);

impl Loader<i32> for LoadAuthors {
    type Value = Author;
    type Error = Infallible;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        tracing::debug!(?keys, "resolving authors");
        let authors = self
            .0
            .authors_by_ids(keys)
            .into_iter()
            .map(|(id, author)| (id, Author::from(author)))
            .collect();
        Ok(authors)
    }
}
