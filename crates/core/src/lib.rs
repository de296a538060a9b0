//! Domain logic for the cinema backend.
//!
//! Everything here is free of I/O: the error taxonomy shared by the other
//! crates, movie input validation, and the hall diagram renderer.

pub mod error;
pub mod hall;
pub mod movie;
pub mod types;
