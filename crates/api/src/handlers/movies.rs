//! Handlers for movie records.
//!
//! Thin adapters over [`MovieRepo`]: validation and constraint handling live
//! in the repository, and errors map to HTTP statuses through [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::movie::{parse_movie_id, MOVIE_ENTITY};
use cinema_db::models::movie::CreateMovie;
use cinema_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /movies
///
/// Create a movie and its genre associations. Returns the created movie
/// without genres.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(format!("invalid json: {e}")))?;

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies
///
/// List all movies with their genres, newest first.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool).await?;

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie_id = parse_movie_id(&id)?;

    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: MOVIE_ENTITY,
                id: movie_id.to_string(),
            })
        })?;

    Ok(Json(movie))
}

/// DELETE /movies/{id}
///
/// Delete a movie. Dependent showtimes or reservations block the delete
/// with 409.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    MovieRepo::delete(&state.pool, &id).await?;

    tracing::info!(movie_id = %id.trim(), "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
