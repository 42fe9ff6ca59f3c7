pub mod graphql;
pub mod openapi;
pub mod schemas;
