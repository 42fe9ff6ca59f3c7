mod get_cast_members;

pub use get_cast_members::*;
