use async_trait::async_trait;
use marquee_core::error::StorageError;
use marquee_core::movie::{Movie, MovieDraft, MovieId};
use marquee_core::repository::{ReadRepository, Repository, Result};
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};
use tracing::debug;

/// MySQL implementation of the repository contract.
///
/// Rows live in the `movies` table created by the embedded migrations
/// (see [`MySqlRepository::migrate`]). Ids come from `AUTO_INCREMENT`.
/// Title and director use a binary collation so the duplicate check is an
/// exact, case-sensitive comparison.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Operation(format!("migration failed: {e}")))?;
        debug!("movie schema is up to date");
        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn movie_from_row(row: &MySqlRow) -> Result<Movie> {
    Ok(Movie {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        title: row.try_get("title").map_err(map_sqlx_error)?,
        director: row.try_get("director").map_err(map_sqlx_error)?,
        release_year: row.try_get("release_year").map_err(map_sqlx_error)?,
        genre: row.try_get("genre").map_err(map_sqlx_error)?,
        imdb_rating: row.try_get("imdb_rating").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, director, release_year, genre, imdb_rating
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(movie_from_row).collect()
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, director, release_year, genre, imdb_rating
            FROM movies
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(movie_from_row).transpose()
    }

    async fn exists_by_title_and_director(&self, title: &str, director: &str) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM movies
            WHERE title = ?
              AND director = ?
            LIMIT 1
            "#,
        )
        .bind(title)
        .bind(director)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }

    async fn exists_by_id(&self, id: MovieId) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM movies
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, director, release_year, genre, imdb_rating)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.director)
        .bind(draft.release_year)
        .bind(&draft.genre)
        .bind(draft.imdb_rating)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        MovieId::try_from(result.last_insert_id()).map_err(|_| {
            StorageError::InvalidData(format!(
                "generated id {} does not fit a movie id",
                result.last_insert_id()
            ))
        })
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        // MySQL counts changed rows, so zero affected rows is not "missing".
        sqlx::query(
            r#"
            UPDATE movies
            SET title = ?, director = ?, release_year = ?, genre = ?, imdb_rating = ?
            WHERE id = ?
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.release_year)
        .bind(&movie.genre)
        .bind(movie.imdb_rating)
        .bind(movie.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM movies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
