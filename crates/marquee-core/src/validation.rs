use crate::error::CatalogError;
use crate::movie::MovieDraft;
use std::ops::RangeInclusive;

/// Accepted release years. 1888 is the year of the oldest surviving film.
pub const RELEASE_YEAR_RANGE: RangeInclusive<i32> = 1888..=2100;

/// Accepted IMDb ratings.
pub const IMDB_RATING_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Checks a draft against the movie domain rules.
///
/// Rules are applied in a fixed order and the first violation is returned:
/// release year, rating, then the title, director and genre presence checks.
pub fn validate(draft: &MovieDraft) -> Result<(), CatalogError> {
    if !RELEASE_YEAR_RANGE.contains(&draft.release_year) {
        return Err(CatalogError::InvalidYear(format!(
            "Release year must be between {} and {}",
            RELEASE_YEAR_RANGE.start(),
            RELEASE_YEAR_RANGE.end()
        )));
    }

    // NaN is never contained in the range.
    if !IMDB_RATING_RANGE.contains(&draft.imdb_rating) {
        return Err(CatalogError::InvalidRating(
            "IMDb rating must be between 0 and 10".to_string(),
        ));
    }

    require_text("Title", &draft.title)?;
    require_text("Director", &draft.director)?;
    require_text("Genre", &draft.genre)?;

    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::Validation(format!(
            "{field} must not be null or empty"
        )));
    }
    Ok(())
}
