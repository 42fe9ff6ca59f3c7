use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::category::application::domain::entities::Category;
use crate::shared::api::listing::{respond_with_listing, ListResponse, ListingQuery};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Filme")]
    pub name: String,
    #[schema(example = "Categoria de filmes")]
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List categories
///
/// Sortable by `name` (default) or `description`. `search` matches both fields.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(ListingQuery),
    responses(
        (
            status = 200,
            description = "Page of categories",
            body = ListResponse<CategoryResponse>,
            example = json!({
                "data": [{
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Filme",
                    "description": "Categoria de filmes"
                }],
                "meta": {"page": 1, "per_page": 5, "sort": "name", "direction": "asc"}
            })
        ),
        (status = 400, description = "Invalid listing parameters", body = ErrorResponse),
        (status = 500, description = "Search engine failure", body = ErrorResponse)
    )
)]
#[get("/categories")]
pub async fn get_categories_handler(
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_listing(
        data.categories.as_ref(),
        query.into_inner(),
        CategoryResponse::from,
    )
    .await
}
