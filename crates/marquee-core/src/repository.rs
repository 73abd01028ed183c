use crate::error::StorageError;
use crate::movie::{Movie, MovieDraft, MovieId};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a movie store.
///
/// This trait provides only the read operations from [`Repository`].
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored movie, ordered by id.
    async fn find_all(&self) -> Result<Vec<Movie>>;

    /// Retrieves the movie with the given id.
    /// Returns `None` if it does not exist.
    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Checks whether a movie with exactly this title and director exists.
    async fn exists_by_title_and_director(&self, title: &str, director: &str) -> Result<bool>;

    /// Checks whether a movie with the given id exists.
    async fn exists_by_id(&self, id: MovieId) -> Result<bool>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a new movie and returns the id assigned to it.
    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId>;

    /// Overwrites the stored row that has `movie.id`.
    async fn update(&self, movie: &Movie) -> Result<()>;

    /// Deletes the movie with the given id.
    /// Returns `true` if a row existed and was removed.
    async fn delete_by_id(&self, id: MovieId) -> Result<bool>;
}
