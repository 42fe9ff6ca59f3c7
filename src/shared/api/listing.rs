// src/shared/api/listing.rs
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::ApiResponse;
use crate::shared::domain::CatalogEntity;
use crate::shared::listing::{
    ListError, ListOutput, ListUseCase, ListingInput, ListingInputError, ListingParams,
    SortableField,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    /// Free-text search over the collection's searchable fields
    pub search: Option<String>,

    /// Page number, starting at 1 (default 1). `page * per_page` may not exceed 10000
    pub page: Option<i64>,

    /// Items per page, 1 to 100 (default 5)
    pub per_page: Option<i64>,

    /// Field to sort by
    pub sort: Option<String>,

    /// Sort direction, `asc` or `desc` (default `asc`)
    pub direction: Option<String>,
}

impl From<ListingQuery> for ListingParams {
    fn from(q: ListingQuery) -> Self {
        ListingParams {
            search: q.search,
            page: q.page,
            per_page: q.per_page,
            sort: q.sort,
            direction: q.direction,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMetaResponse {
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 5)]
    pub per_page: u32,
    #[schema(example = "name")]
    pub sort: String,
    #[schema(example = "asc")]
    pub direction: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: ListMetaResponse,
}

impl<T> ListResponse<T> {
    pub fn from_output<E, S: SortableField>(
        output: ListOutput<E, S>,
        to_response: impl FnMut(E) -> T,
    ) -> Self {
        let output = output.map(to_response);

        Self {
            data: output.data,
            meta: ListMetaResponse {
                page: output.meta.page,
                per_page: output.meta.per_page,
                sort: output.meta.sort.as_str().to_string(),
                direction: output.meta.direction.to_string(),
            },
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler helper
// ──────────────────────────────────────────────────────────
//

pub fn map_listing_input_error(err: ListingInputError) -> HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

pub fn map_list_error(kind: &str, err: ListError) -> HttpResponse {
    match err {
        ListError::QueryFailed(msg) => {
            error!("Failed to list {} entries: {}", kind, msg);
            ApiResponse::internal_error()
        }
    }
}

/// Validates the query, runs the use case and renders `{data, meta}`.
pub async fn respond_with_listing<E, T>(
    use_case: &dyn ListUseCase<E>,
    query: ListingQuery,
    to_response: impl FnMut(E) -> T,
) -> HttpResponse
where
    E: CatalogEntity,
    T: Serialize,
{
    let input = match ListingInput::<E::SortField>::parse(query.into()) {
        Ok(input) => input,
        Err(err) => return map_listing_input_error(err),
    };

    match use_case.execute(input).await {
        Ok(output) => HttpResponse::Ok().json(ListResponse::from_output(output, to_response)),
        Err(err) => map_list_error(E::KIND, err),
    }
}
