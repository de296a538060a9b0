pub mod hall;
pub mod movies;
