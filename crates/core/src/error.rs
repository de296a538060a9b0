#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request referenced a related entity that does not exist.
    #[error("Missing reference: {0}")]
    Reference(String),

    /// The operation is blocked by dependent data.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
