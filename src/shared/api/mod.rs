pub mod listing;
pub mod query_config;
pub mod response;

pub use response::ApiResponse;
