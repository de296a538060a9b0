//! Route tree.
//!
//! ```text
//! GET    /health          service + database health
//! GET    /hall            hall diagram PNG
//! GET    /movies          list movies with genres
//! POST   /movies          create movie
//! GET    /movies/{id}     get movie with genres
//! DELETE /movies/{id}     delete movie
//! ```

pub mod hall;
pub mod health;
pub mod movies;
