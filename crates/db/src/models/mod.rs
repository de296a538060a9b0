//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any `Deserialize` request DTOs for that entity.

pub mod genre;
pub mod movie;
