// src/shared/api/query_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::QueryConfig;

/// Rejects undecodable query strings (e.g. `page=abc`) with the standard error body.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
