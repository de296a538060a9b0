//! Movie entity model and DTOs.

use cinema_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::genre::Genre;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
}

/// A movie enriched with its associated genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieWithGenres {
    #[serde(flatten)]
    pub movie: Movie,
    /// Always present; empty when the movie has no genres.
    pub genres: Vec<Genre>,
}

/// One row of the `movies LEFT JOIN movie_genres LEFT JOIN genres` query.
///
/// A movie without genres yields a single row with both genre columns NULL.
#[derive(Debug, Clone, FromRow)]
pub struct MovieGenreRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
    pub genre_id: Option<DbId>,
    pub genre_name: Option<String>,
}

/// DTO for creating a new movie.
///
/// Missing text fields deserialize as empty strings so they are reported by
/// validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub poster_url: Option<String>,
    /// Genre UUIDs as sent by the client; parsed during validation.
    #[serde(default)]
    pub genre_ids: Vec<String>,
}
