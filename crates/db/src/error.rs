use cinema_core::error::CoreError;

/// Error returned by repository operations.
///
/// Domain failures (validation, missing references, conflicts) are carried
/// as [`CoreError`]; anything else the database reports is a storage
/// failure whose details must not reach clients.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
