use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::cast_member::application::domain::entities::CastMember;
use crate::shared::api::listing::{respond_with_listing, ListResponse, ListingQuery};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CastMemberResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Christopher Nolan")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "DIRECTOR")]
    pub member_type: String,
}

impl From<CastMember> for CastMemberResponse {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            member_type: member.member_type.as_str().to_string(),
        }
    }
}

/// List cast members
///
/// Sortable by `name` (default) or `type`. `search` matches both fields.
#[utoipa::path(
    get,
    path = "/cast_members",
    tag = "cast_members",
    params(ListingQuery),
    responses(
        (status = 200, description = "Page of cast members", body = ListResponse<CastMemberResponse>),
        (status = 400, description = "Invalid listing parameters", body = ErrorResponse),
        (status = 500, description = "Search engine failure", body = ErrorResponse)
    )
)]
#[get("/cast_members")]
pub async fn get_cast_members_handler(
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_listing(
        data.cast_members.as_ref(),
        query.into_inner(),
        CastMemberResponse::from,
    )
    .await
}
