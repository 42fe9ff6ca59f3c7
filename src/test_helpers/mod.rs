use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::shared::domain::CatalogEntity;
use crate::video::application::domain::entities::Video;
use crate::video::application::ports::outgoing::video_repository::VideoRepository;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct SeededResponse {
    id: Uuid,
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Index a video so listing tests have data
/// POST /test/videos
pub async fn seed_video(
    video: web::Json<Video>,
    repository: web::Data<Arc<dyn VideoRepository>>,
) -> Result<HttpResponse> {
    let video = video.into_inner();

    if let Err(err) = video.validate() {
        return Ok(ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()));
    }

    match repository.save(&video).await {
        Ok(()) => Ok(HttpResponse::Created().json(SeededResponse { id: video.id })),
        Err(err) => {
            error!("Failed to seed video {}: {}", video.id, err);
            Ok(ApiResponse::internal_error())
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/videos", web::post().to(seed_video)),
    );
}
