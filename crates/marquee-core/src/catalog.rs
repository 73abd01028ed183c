use crate::movie::{Movie, MovieDraft, MovieId};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::CatalogError>;

/// The movie use cases exposed to the outside world.
#[async_trait]
pub trait MovieCatalog: Send + Sync + 'static {
    /// Lists every movie. An empty catalog is reported as
    /// [`CatalogError::EmptyResult`](crate::CatalogError::EmptyResult).
    async fn list(&self) -> Result<Vec<Movie>>;

    /// Fetches a single movie by id.
    async fn get(&self, id: MovieId) -> Result<Movie>;

    /// Validates and stores a new movie, returning it with its assigned id.
    async fn add(&self, draft: MovieDraft) -> Result<Movie>;

    /// Validates the draft and overwrites the movie with the given id.
    async fn update(&self, id: MovieId, draft: MovieDraft) -> Result<Movie>;

    /// Deletes the movie with the given id.
    async fn delete(&self, id: MovieId) -> Result<()>;
}
