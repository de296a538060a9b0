//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /hall` (`?rows=&cols=&occupiedPct=`).
///
/// Kept as raw strings: malformed values fall back to defaults instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct HallQuery {
    pub rows: Option<String>,
    pub cols: Option<String>,
    #[serde(rename = "occupiedPct")]
    pub occupied_pct: Option<String>,
}
