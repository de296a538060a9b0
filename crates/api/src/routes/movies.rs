//! Route definitions for movies.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies        -> list_movies
/// POST   /movies        -> create_movie
/// GET    /movies/{id}   -> get_movie
/// DELETE /movies/{id}   -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/{id}",
            get(movies::get_movie).delete(movies::delete_movie),
        )
}
