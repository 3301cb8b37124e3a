use async_graphql::{ComplexObject, Context, Object, PathSegment, ServerError, SimpleObject};

use crate::error::StoreError;
use crate::store::{self, RecordStore};

use super::loaders::Loaders;

/// Author of a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

#[ComplexObject]
impl Author {
    async fn books(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = ctx.load_books(self.id).await?;
        Ok(Some(books.into_iter().map(Some).collect()))
    }
}

impl From<store::Author> for Author {
    fn from(author: store::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

/// This represents a book from an author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    id: String,
    title: String,
    author_id: i32,
}

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Author> {
        ctx.load_author(self.author_id).await
    }
}

impl From<store::Book> for Book {
    fn from(book: store::Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
        }
    }
}

fn nullable_list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(item.into())).collect())
}

/// `Book.author` is non-null, so a book whose author is missing has to
/// resolve to null itself. When the current field selects `author`, every
/// such book becomes `None` and the error is reported at its `author` path.
/// `indexed` marks a list field, whose items add their index to the path.
async fn resolve_books(
    ctx: &Context<'_>,
    books: Vec<store::Book>,
    indexed: bool,
) -> async_graphql::Result<Vec<Option<Book>>> {
    let Some(selection) = ctx
        .field()
        .selection_set()
        .find(|field| field.name() == "author")
    else {
        return Ok(books.into_iter().map(|book| Some(book.into())).collect());
    };
    let key = selection.alias().unwrap_or("author").to_string();

    let authors = ctx
        .load_authors(books.iter().map(|book| book.author_id).collect())
        .await?;

    let resolved = books
        .into_iter()
        .enumerate()
        .map(|(index, book)| {
            if authors.contains_key(&book.author_id) {
                return Some(book.into());
            }
            let err = StoreError::AuthorNotFound(book.author_id);
            let mut err = ctx.set_error_path(ServerError::new(err.to_string(), Some(ctx.item.pos)));
            if indexed {
                err.path.push(PathSegment::Index(index));
            }
            err.path.push(PathSegment::Field(key.clone()));
            ctx.add_error(err);
            None
        })
        .collect();
    Ok(resolved)
}

async fn resolve_book(
    ctx: &Context<'_>,
    book: Option<store::Book>,
) -> async_graphql::Result<Option<Book>> {
    let Some(book) = book else {
        return Ok(None);
    };
    Ok(resolve_books(ctx, vec![book], false).await?.pop().flatten())
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Book>> {
        let book = ctx.data::<RecordStore>()?.book(&id);
        resolve_book(ctx, book).await
    }

    /// List of books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = ctx.data::<RecordStore>()?.books();
        Ok(Some(resolve_books(ctx, books, true).await?))
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Author>> {
        Ok(ctx.data::<RecordStore>()?.author(id).map(Author::from))
    }

    /// List of Authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        Ok(nullable_list(ctx.data::<RecordStore>()?.authors()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let book = ctx.data::<RecordStore>()?.add_book(title, author_id);
        tracing::info!(id = %book.id, author_id, "added book");
        resolve_book(ctx, Some(book)).await
    }

    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let author = ctx.data::<RecordStore>()?.add_author(name)?;
        tracing::info!(id = author.id, "added author");
        Ok(Some(author.into()))
    }
}
