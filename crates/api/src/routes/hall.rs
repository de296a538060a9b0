use axum::routing::get;
use axum::Router;

use crate::handlers::hall;
use crate::state::AppState;

/// Hall diagram route.
///
/// ```text
/// GET /hall?rows=&cols=&occupiedPct=   -> hall_diagram
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/hall", get(hall::hall_diagram))
}
