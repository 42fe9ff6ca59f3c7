pub mod api;
pub mod config;
pub mod domain;
pub mod listing;
pub mod search_engine;
