//! Genre reference data.

use cinema_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table. Genres are seeded outside this service and
/// only ever referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
