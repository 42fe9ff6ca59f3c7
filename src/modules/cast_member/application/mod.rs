pub mod domain;
pub mod list_cast_members;
