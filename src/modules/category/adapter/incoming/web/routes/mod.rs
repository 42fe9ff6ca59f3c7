mod get_categories;

pub use get_categories::*;
