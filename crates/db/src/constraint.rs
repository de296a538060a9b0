//! Classification of database constraint violations.
//!
//! Checks the driver's typed error kind rather than the error text, so the
//! result does not depend on server locale or message wording.

use cinema_core::error::CoreError;
use sqlx::error::ErrorKind;

use crate::error::DbError;

/// Whether `err` is a foreign-key violation reported by the database.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => matches!(db_err.kind(), ErrorKind::ForeignKeyViolation),
        _ => false,
    }
}

/// Map a database error for an operation guarded by foreign keys.
///
/// A foreign-key violation becomes the domain error built by `on_violation`,
/// which receives the violated constraint name when the driver reports one.
/// Every other error is returned as [`DbError::Storage`] for the HTTP
/// layer to log.
pub fn classify_foreign_key<F>(err: sqlx::Error, on_violation: F) -> DbError
where
    F: FnOnce(Option<&str>) -> CoreError,
{
    if is_foreign_key_violation(&err) {
        let constraint = err.as_database_error().and_then(|e| e.constraint());
        tracing::debug!(?constraint, "Foreign key violation");
        return DbError::Core(on_violation(constraint));
    }
    DbError::Storage(err)
}
