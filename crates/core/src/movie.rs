//! Input validation for movie records.
//!
//! Movies are created once and never updated, so all normalization happens
//! here before the repository opens a transaction.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in `NotFound` errors.
pub const MOVIE_ENTITY: &str = "Movie";

/// A movie that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub poster_url: Option<String>,
    /// Distinct genre ids in first-seen order.
    pub genre_ids: Vec<DbId>,
}

/// Validate and normalize the fields of a movie create request.
pub fn validate_new_movie(
    title: &str,
    description: &str,
    poster_url: Option<&str>,
    genre_ids: &[String],
) -> Result<NewMovie, CoreError> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(CoreError::Validation(
            "title and description are required".to_string(),
        ));
    }

    Ok(NewMovie {
        title: title.to_string(),
        description: description.to_string(),
        poster_url: normalize_poster_url(poster_url),
        genre_ids: parse_genre_ids(genre_ids)?,
    })
}

/// Parse genre identifiers as UUIDs.
///
/// Blank entries are skipped and duplicates collapsed, keeping the order in
/// which ids first appear.
pub fn parse_genre_ids(raw: &[String]) -> Result<Vec<DbId>, CoreError> {
    let mut ids: Vec<DbId> = Vec::with_capacity(raw.len());
    for value in raw {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let id = DbId::parse_str(value).map_err(|_| {
            CoreError::Validation("one or more genreIds are not valid UUIDs".to_string())
        })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Blank poster URLs are stored as NULL.
pub fn normalize_poster_url(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse the movie id taken from a request path.
///
/// An empty id is a client error. An id that is not a UUID can never match a
/// stored movie, so it is reported as not found.
pub fn parse_movie_id(raw: &str) -> Result<DbId, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation("missing movie id".to_string()));
    }
    DbId::parse_str(raw).map_err(|_| CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id: raw.to_string(),
    })
}
