use thiserror::Error;

/// Errors raised while resolving a field against the record store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("no author with id {0}")]
    AuthorNotFound(i32),

    #[error("author ids exhausted")]
    AuthorIdsExhausted,
}
