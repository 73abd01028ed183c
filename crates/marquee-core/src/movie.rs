use serde::{Deserialize, Serialize};

/// System-assigned movie identifier.
///
/// Valid ids are strictly positive; the type is signed so that callers can
/// pass through whatever the client sent and let the catalog reject it.
pub type MovieId = i64;

/// A movie as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub imdb_rating: f32,
}

/// The mutable fields of a movie, without an identity.
///
/// Used as the input of both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub imdb_rating: f32,
}

impl MovieDraft {
    /// Attaches an identity to the draft.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            release_year: self.release_year,
            genre: self.genre,
            imdb_rating: self.imdb_rating,
        }
    }
}

impl Movie {
    /// Replaces all mutable fields with the draft's, keeping the id.
    pub fn overwrite(&mut self, draft: MovieDraft) {
        self.title = draft.title;
        self.director = draft.director;
        self.release_year = draft.release_year;
        self.genre = draft.genre;
        self.imdb_rating = draft.imdb_rating;
    }
}
