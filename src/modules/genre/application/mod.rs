pub mod domain;
pub mod list_genres;
