mod query;
mod types;

use actix_web::{get, post, web, HttpResponse, Responder};
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

pub use query::Query;
pub use types::{
    CastMemberObject, CategoryObject, GenreObject, ListResult, MetaObject, VideoObject,
};

use crate::AppState;

pub type CatalogSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> CatalogSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

#[post("/graphql")]
pub async fn graphql_handler(
    schema: web::Data<CatalogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Interactive GraphiQL explorer.
#[get("/graphql")]
pub async fn graphiql_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
