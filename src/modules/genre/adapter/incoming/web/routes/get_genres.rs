use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::genre::application::domain::entities::Genre;
use crate::shared::api::listing::{respond_with_listing, ListResponse, ListingQuery};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Drama")]
    pub name: String,
    /// Ids of the linked categories
    pub categories: Vec<Uuid>,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            categories: genre.categories.into_iter().collect(),
        }
    }
}

/// List genres
///
/// Sortable by `name`. Each genre carries the ids of its categories.
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    params(ListingQuery),
    responses(
        (status = 200, description = "Page of genres", body = ListResponse<GenreResponse>),
        (status = 400, description = "Invalid listing parameters", body = ErrorResponse),
        (status = 500, description = "Search engine failure", body = ErrorResponse)
    )
)]
#[get("/genres")]
pub async fn get_genres_handler(
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_listing(data.genres.as_ref(), query.into_inner(), GenreResponse::from).await
}
