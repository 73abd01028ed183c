use async_trait::async_trait;
use dashmap::DashMap;
use marquee_core::error::StorageError;
use marquee_core::movie::{Movie, MovieDraft, MovieId};
use marquee_core::repository::{ReadRepository, Repository, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Ids come from a monotonic counter starting at 1
/// and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<MovieId, Movie>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored movies.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        let mut movies: Vec<Movie> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        movies.sort_by_key(|movie| movie.id);
        Ok(movies)
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.storage.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_title_and_director(&self, title: &str, director: &str) -> Result<bool> {
        Ok(self
            .storage
            .iter()
            .any(|entry| entry.title == title && entry.director == director))
    }

    async fn exists_by_id(&self, id: MovieId) -> Result<bool> {
        Ok(self.storage.contains_key(&id))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.storage.insert(id, draft.clone().into_movie(id));
        Ok(id)
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        // Update-in-place only; never resurrect a row that was deleted meanwhile.
        let Some(mut entry) = self.storage.get_mut(&movie.id) else {
            return Err(StorageError::Operation(format!(
                "movie {} does not exist",
                movie.id
            )));
        };
        *entry = movie.clone();
        Ok(())
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<bool> {
        Ok(self.storage.remove(&id).is_some())
    }
}
