mod get_genres;

pub use get_genres::*;
