use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::shared::search_engine::SearchEngineClient;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    search_engine: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/healthcheck")]
pub async fn healthcheck() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the search engine
#[get("/ready")]
pub async fn readiness(search_engine: web::Data<Arc<dyn SearchEngineClient>>) -> impl Responder {
    match search_engine.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            search_engine: "ok",
        }),
        Err(err) => {
            warn!("Readiness check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                search_engine: "unhealthy",
            })
        }
    }
}
