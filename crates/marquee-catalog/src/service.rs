use async_trait::async_trait;
use marquee_core::validation::validate;
use marquee_core::{CatalogError, Movie, MovieCatalog, MovieDraft, MovieId, Repository};
use std::sync::Arc;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, CatalogError>;

/// A concrete implementation of the [`MovieCatalog`] trait.
///
/// This service wraps a `Repository` and handles:
/// - Id preconditions (checked before any store access)
/// - Draft validation
/// - The duplicate (title, director) check on create
/// - Translating store failures into catalog error kinds
///
/// Update deliberately skips the duplicate check; only creation enforces
/// unique (title, director) pairs. No operation retries a failed store call.
#[derive(Debug)]
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> CatalogService<R> {
    /// Creates a new `CatalogService` backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a service sharing an already shared repository.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn ensure_positive(id: MovieId) -> Result<()> {
        if id <= 0 {
            warn!(id, "rejected non-positive movie id");
            return Err(CatalogError::BadRequest(
                "ID must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    fn not_found(id: MovieId) -> CatalogError {
        CatalogError::NotFound(format!("Movie with ID {id} not found"))
    }
}

#[async_trait]
impl<R: Repository> MovieCatalog for CatalogService<R> {
    async fn list(&self) -> Result<Vec<Movie>> {
        let movies = self.repository.find_all().await?;

        if movies.is_empty() {
            debug!("catalog is empty");
            return Err(CatalogError::EmptyResult(
                "No movies found in the database".to_string(),
            ));
        }

        debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    async fn get(&self, id: MovieId) -> Result<Movie> {
        Self::ensure_positive(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn add(&self, draft: MovieDraft) -> Result<Movie> {
        validate(&draft).inspect_err(|e| warn!(error = %e, "rejected movie draft"))?;

        if self
            .repository
            .exists_by_title_and_director(&draft.title, &draft.director)
            .await?
        {
            warn!(title = %draft.title, director = %draft.director, "duplicate movie");
            return Err(CatalogError::Duplicate(
                "Movie with the same title and director already exists".to_string(),
            ));
        }

        let id = self.repository.insert(&draft).await.map_err(|e| {
            warn!(error = %e, "failed to insert movie");
            CatalogError::Persistence(
                "Error occurred while saving the movie to the database".to_string(),
            )
        })?;

        debug!(id, title = %draft.title, "added movie");
        Ok(draft.into_movie(id))
    }

    async fn update(&self, id: MovieId, draft: MovieDraft) -> Result<Movie> {
        Self::ensure_positive(id)?;

        let mut movie = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        validate(&draft).inspect_err(|e| warn!(id, error = %e, "rejected movie draft"))?;

        movie.overwrite(draft);

        self.repository.update(&movie).await.map_err(|e| {
            warn!(id, error = %e, "failed to update movie");
            CatalogError::Persistence(
                "Error occurred while updating the movie in the database".to_string(),
            )
        })?;

        debug!(id, "updated movie");
        Ok(movie)
    }

    async fn delete(&self, id: MovieId) -> Result<()> {
        Self::ensure_positive(id)?;

        if !self.repository.exists_by_id(id).await? {
            return Err(CatalogError::DeletionFailure(format!(
                "Movie with ID {id} cannot be deleted because it does not exist"
            )));
        }

        // A store error and a row that vanished after the existence check
        // are reported the same way.
        match self.repository.delete_by_id(id).await {
            Ok(true) => {
                debug!(id, "deleted movie");
                Ok(())
            }
            Ok(false) | Err(_) => Err(CatalogError::AlreadyDeleted(format!(
                "Movie with ID {id} has already been deleted"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{ReadRepository, StorageError};
    use marquee_storage::InMemoryRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type StoreResult<T> = marquee_core::repository::Result<T>;

    /// Wraps the in-memory store, counts every call and can inject failures.
    #[derive(Default)]
    struct ProbeRepository {
        inner: InMemoryRepository,
        calls: AtomicUsize,
        fail_reads: bool,
        fail_writes: bool,
        fail_deletes: bool,
        lose_deletes: bool,
    }

    impl ProbeRepository {
        fn touch(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        fn read_guard(&self) -> StoreResult<()> {
            self.touch();
            if self.fail_reads {
                return Err(StorageError::Unavailable("connection refused".to_string()));
            }
            Ok(())
        }

        fn write_guard(&self) -> StoreResult<()> {
            self.touch();
            if self.fail_writes {
                return Err(StorageError::Query("disk full".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ReadRepository for ProbeRepository {
        async fn find_all(&self) -> StoreResult<Vec<Movie>> {
            self.read_guard()?;
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: MovieId) -> StoreResult<Option<Movie>> {
            self.read_guard()?;
            self.inner.find_by_id(id).await
        }

        async fn exists_by_title_and_director(
            &self,
            title: &str,
            director: &str,
        ) -> StoreResult<bool> {
            self.read_guard()?;
            self.inner
                .exists_by_title_and_director(title, director)
                .await
        }

        async fn exists_by_id(&self, id: MovieId) -> StoreResult<bool> {
            self.read_guard()?;
            self.inner.exists_by_id(id).await
        }
    }

    #[async_trait]
    impl Repository for ProbeRepository {
        async fn insert(&self, draft: &MovieDraft) -> StoreResult<MovieId> {
            self.write_guard()?;
            self.inner.insert(draft).await
        }

        async fn update(&self, movie: &Movie) -> StoreResult<()> {
            self.write_guard()?;
            self.inner.update(movie).await
        }

        async fn delete_by_id(&self, id: MovieId) -> StoreResult<bool> {
            self.touch();
            if self.fail_deletes {
                return Err(StorageError::Timeout("lock wait timeout".to_string()));
            }
            if self.lose_deletes {
                return Ok(false);
            }
            self.inner.delete_by_id(id).await
        }
    }

    fn inception() -> MovieDraft {
        MovieDraft {
            title: "Inception".to_string(),
            director: "Christopher Nolan".to_string(),
            release_year: 2010,
            genre: "Sci-Fi".to_string(),
            imdb_rating: 8.2,
        }
    }

    fn test_service() -> CatalogService<InMemoryRepository> {
        CatalogService::new(InMemoryRepository::new())
    }

    fn probe_service(
        probe: ProbeRepository,
    ) -> (CatalogService<ProbeRepository>, Arc<ProbeRepository>) {
        let probe = Arc::new(probe);
        (CatalogService::from_shared(Arc::clone(&probe)), probe)
    }

    #[tokio::test]
    async fn add_returns_assigned_id() {
        let service = test_service();

        let movie = service.add(inception()).await.unwrap();

        assert!(movie.id > 0);
        assert_eq!(movie, inception().into_movie(movie.id));
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let service = test_service();

        let added = service.add(inception()).await.unwrap();
        let fetched = service.get(added.id).await.unwrap();

        assert_eq!(fetched, inception().into_movie(added.id));
    }

    #[tokio::test]
    async fn add_duplicate_title_and_director_fails() {
        let (service, probe) = probe_service(ProbeRepository::default());

        service.add(inception()).await.unwrap();
        let err = service
            .add(MovieDraft {
                release_year: 2011,
                genre: "Thriller".to_string(),
                ..inception()
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::Duplicate(
                "Movie with the same title and director already exists".to_string()
            )
        );
        assert_eq!(probe.inner.len(), 1);
    }

    #[tokio::test]
    async fn add_same_title_with_other_director_is_allowed() {
        let service = test_service();

        service.add(inception()).await.unwrap();
        service
            .add(MovieDraft {
                director: "Someone Else".to_string(),
                ..inception()
            })
            .await
            .unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn add_invalid_draft_never_touches_store() {
        let (service, probe) = probe_service(ProbeRepository::default());

        let err = service
            .add(MovieDraft {
                release_year: 1800,
                ..inception()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidYear(_)));

        let err = service
            .add(MovieDraft {
                imdb_rating: 10.5,
                ..inception()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRating(_)));

        let err = service
            .add(MovieDraft {
                genre: String::new(),
                ..inception()
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::Validation("Genre must not be null or empty".to_string())
        );

        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn add_write_failure_is_persistence_error() {
        let (service, _) = probe_service(ProbeRepository {
            fail_writes: true,
            ..Default::default()
        });

        let err = service.add(inception()).await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::Persistence(
                "Error occurred while saving the movie to the database".to_string()
            )
        );
    }

    #[tokio::test]
    async fn list_empty_catalog_is_empty_result() {
        let service = test_service();

        let err = service.list().await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::EmptyResult("No movies found in the database".to_string())
        );
    }

    #[tokio::test]
    async fn list_returns_movies_in_id_order() {
        let service = test_service();
        let first = service.add(inception()).await.unwrap();
        let second = service
            .add(MovieDraft {
                title: "Interstellar".to_string(),
                release_year: 2014,
                imdb_rating: 8.7,
                ..inception()
            })
            .await
            .unwrap();

        let movies = service.list().await.unwrap();

        assert_eq!(movies, vec![first, second]);
    }

    #[tokio::test]
    async fn list_read_failure_is_unexpected() {
        let (service, _) = probe_service(ProbeRepository {
            fail_reads: true,
            ..Default::default()
        });

        let err = service.list().await.unwrap_err();

        assert!(matches!(err, CatalogError::Unexpected(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn non_positive_ids_are_rejected_before_store_access() {
        let (service, probe) = probe_service(ProbeRepository::default());
        let bad_request = CatalogError::BadRequest("ID must be a positive number".to_string());

        for id in [0, -1, MovieId::MIN] {
            assert_eq!(service.get(id).await.unwrap_err(), bad_request);
            assert_eq!(
                service.update(id, inception()).await.unwrap_err(),
                bad_request
            );
            assert_eq!(service.delete(id).await.unwrap_err(), bad_request);
        }

        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn get_missing_movie_is_not_found() {
        let service = test_service();

        let err = service.get(42).await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::NotFound("Movie with ID 42 not found".to_string())
        );
    }

    #[tokio::test]
    async fn update_missing_movie_leaves_store_unchanged() {
        let (service, probe) = probe_service(ProbeRepository::default());
        let existing = service.add(inception()).await.unwrap();

        let err = service
            .update(
                99,
                MovieDraft {
                    title: "Unknown".to_string(),
                    director: "NoName".to_string(),
                    release_year: 2000,
                    genre: "Unknown".to_string(),
                    imdb_rating: 5.0,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::NotFound("Movie with ID 99 not found".to_string())
        );
        assert_eq!(probe.inner.find_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let service = test_service();
        let added = service.add(inception()).await.unwrap();

        let replacement = MovieDraft {
            title: "Inception Updated".to_string(),
            director: "Chris Nolan".to_string(),
            release_year: 2011,
            genre: "Thriller".to_string(),
            imdb_rating: 9.0,
        };
        let updated = service.update(added.id, replacement.clone()).await.unwrap();

        assert_eq!(updated, replacement.clone().into_movie(added.id));
        assert_eq!(
            service.get(added.id).await.unwrap(),
            replacement.into_movie(added.id)
        );
    }

    #[tokio::test]
    async fn update_validates_after_lookup() {
        let service = test_service();
        let added = service.add(inception()).await.unwrap();

        let err = service
            .update(
                added.id,
                MovieDraft {
                    release_year: 2101,
                    ..inception()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidYear(_)));

        // An invalid draft for a missing id reports the missing movie first.
        let err = service
            .update(
                added.id + 1,
                MovieDraft {
                    release_year: 2101,
                    ..inception()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));

        assert_eq!(service.get(added.id).await.unwrap(), added);
    }

    #[tokio::test]
    async fn update_may_produce_duplicate_pair() {
        let service = test_service();
        service.add(inception()).await.unwrap();
        let other = service
            .add(MovieDraft {
                title: "Memento".to_string(),
                ..inception()
            })
            .await
            .unwrap();

        let updated = service.update(other.id, inception()).await.unwrap();

        assert_eq!(updated.title, "Inception");
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_write_failure_is_persistence_error() {
        let probe = ProbeRepository::default();
        let id = probe.inner.insert(&inception()).await.unwrap();
        let (service, _) = probe_service(ProbeRepository {
            fail_writes: true,
            ..probe
        });

        let err = service.update(id, inception()).await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::Persistence(
                "Error occurred while updating the movie in the database".to_string()
            )
        );
    }

    #[tokio::test]
    async fn delete_existing_then_get_is_not_found() {
        let service = test_service();
        let added = service.add(inception()).await.unwrap();
        assert_eq!(added.id, 1);

        service.delete(1).await.unwrap();

        assert_eq!(
            service.get(1).await.unwrap_err(),
            CatalogError::NotFound("Movie with ID 1 not found".to_string())
        );
    }

    #[tokio::test]
    async fn delete_missing_movie_is_deletion_failure() {
        let service = test_service();

        let err = service.delete(999).await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::DeletionFailure(
                "Movie with ID 999 cannot be deleted because it does not exist".to_string()
            )
        );
    }

    #[tokio::test]
    async fn delete_store_failure_is_already_deleted() {
        let probe = ProbeRepository::default();
        let id = probe.inner.insert(&inception()).await.unwrap();
        let (service, _) = probe_service(ProbeRepository {
            fail_deletes: true,
            ..probe
        });

        let err = service.delete(id).await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::AlreadyDeleted(format!("Movie with ID {id} has already been deleted"))
        );
    }

    #[tokio::test]
    async fn delete_race_is_already_deleted() {
        let probe = ProbeRepository::default();
        let id = probe.inner.insert(&inception()).await.unwrap();
        let (service, _) = probe_service(ProbeRepository {
            lose_deletes: true,
            ..probe
        });

        let err = service.delete(id).await.unwrap_err();

        assert!(matches!(err, CatalogError::AlreadyDeleted(_)));
    }
}
