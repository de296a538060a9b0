//! Handler for the hall diagram image.

use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use cinema_core::hall::{encode_png, render_hall, HallParams};

use crate::error::{AppError, AppResult};
use crate::query::HallQuery;

/// GET /hall
///
/// Render a seating chart as PNG. Malformed query values fall back to their
/// defaults rather than failing the request.
pub async fn hall_diagram(Query(query): Query<HallQuery>) -> AppResult<Response> {
    let params = HallParams::from_query(
        query.rows.as_deref(),
        query.cols.as_deref(),
        query.occupied_pct.as_deref(),
    );

    // Rendering and PNG encoding are CPU-bound.
    let png = tokio::task::spawn_blocking(move || {
        let img = render_hall(&params, &mut rand::rng());
        encode_png(&img)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Hall render task failed: {e}")))??;

    tracing::debug!(
        rows = params.rows,
        cols = params.cols,
        occupied_pct = params.occupied_pct,
        bytes = png.len(),
        "Hall diagram rendered",
    );

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
