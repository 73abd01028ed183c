use marquee_core::{Movie, MovieDraft};
use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Text fields may be missing or `null`; they are then treated as empty so
/// that validation, not decoding, reports them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    pub release_year: i32,
    #[serde(default)]
    pub genre: Option<String>,
    pub imdb_rating: f32,
}

impl From<MovieRequest> for MovieDraft {
    fn from(request: MovieRequest) -> Self {
        MovieDraft {
            title: request.title.unwrap_or_default(),
            director: request.director.unwrap_or_default(),
            release_year: request.release_year,
            genre: request.genre.unwrap_or_default(),
            imdb_rating: request.imdb_rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub imdb_rating: f32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        MovieResponse {
            id: movie.id,
            title: movie.title,
            director: movie.director,
            release_year: movie.release_year,
            genre: movie.genre,
            imdb_rating: movie.imdb_rating,
        }
    }
}
