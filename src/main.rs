pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::cast_member;
pub use modules::category;
pub use modules::genre;
pub use modules::video;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::graphql::{build_schema, graphiql_handler, graphql_handler};
use crate::api::openapi::ApiDoc;
use crate::cast_member::adapter::outgoing::CastMemberRepositoryElasticsearch;
use crate::cast_member::application::domain::entities::CastMember;
use crate::cast_member::application::list_cast_members::ListCastMembersService;
use crate::category::adapter::outgoing::CategoryRepositoryElasticsearch;
use crate::category::application::domain::entities::Category;
use crate::category::application::list_categories::ListCategoriesService;
use crate::genre::adapter::outgoing::GenreRepositoryElasticsearch;
use crate::genre::application::domain::entities::Genre;
use crate::genre::application::list_genres::ListGenresService;
use crate::shared::api::query_config::custom_query_config;
use crate::shared::config::AppConfig;
use crate::shared::listing::ListUseCase;
use crate::shared::search_engine::{ElasticsearchClient, SearchEngineClient};
use crate::video::adapter::outgoing::VideoRepositoryElasticsearch;
use crate::video::application::domain::entities::Video;
use crate::video::application::list_videos::ListVideosService;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn ListUseCase<Category> + Send + Sync>,
    pub cast_members: Arc<dyn ListUseCase<CastMember> + Send + Sync>,
    pub genres: Arc<dyn ListUseCase<Genre> + Send + Sync>,
    pub videos: Arc<dyn ListUseCase<Video> + Send + Sync>,
}

impl AppState {
    /// Wires every listing use case to the search engine.
    pub fn from_search_engine(client: Arc<dyn SearchEngineClient>) -> Self {
        let categories = ListCategoriesService::new(CategoryRepositoryElasticsearch::new(
            Arc::clone(&client),
        ));
        let cast_members = ListCastMembersService::new(CastMemberRepositoryElasticsearch::new(
            Arc::clone(&client),
        ));
        let genres = ListGenresService::new(GenreRepositoryElasticsearch::new(Arc::clone(&client)));
        let videos = ListVideosService::new(VideoRepositoryElasticsearch::new(client));

        Self {
            categories: Arc::new(categories),
            cast_members: Arc::new(cast_members),
            genres: Arc::new(genres),
            videos: Arc::new(videos),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if env == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();
    info!(
        environment = %config.environment,
        search_engine = %config.search_engine.url,
        "Server run on: {}",
        server_url
    );

    let search_engine: Arc<dyn SearchEngineClient> =
        Arc::new(ElasticsearchClient::new(config.search_engine.url.clone()));

    let state = AppState::from_search_engine(Arc::clone(&search_engine));
    let schema = build_schema(state.clone());

    #[cfg(feature = "test-helpers")]
    let video_repository: Arc<dyn crate::video::application::ports::outgoing::video_repository::VideoRepository> =
        Arc::new(VideoRepositoryElasticsearch::new(Arc::clone(&search_engine)));

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(Arc::clone(&search_engine)))
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        let app = app
            .app_data(web::Data::new(Arc::clone(&video_repository)))
            .configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::healthcheck);
    cfg.service(crate::health::readiness);
    // Listings
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::cast_member::adapter::incoming::web::routes::get_cast_members_handler);
    cfg.service(crate::genre::adapter::incoming::web::routes::get_genres_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::get_videos_handler);
    // GraphQL
    cfg.service(graphql_handler);
    cfg.service(graphiql_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
