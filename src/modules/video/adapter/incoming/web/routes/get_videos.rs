use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::listing::{respond_with_listing, ListResponse, ListingQuery};
use crate::video::application::domain::entities::Video;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    #[schema(example = "Inception")]
    pub title: String,
    #[schema(example = 2010)]
    pub launch_year: i32,
    #[schema(example = "AGE_12")]
    pub rating: String,
    pub categories: Vec<Uuid>,
    pub genres: Vec<Uuid>,
    pub cast_members: Vec<Uuid>,
    pub banner_url: Option<String>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            launch_year: video.launch_year,
            rating: video.rating.as_str().to_string(),
            categories: video.categories.into_iter().collect(),
            genres: video.genres.into_iter().collect(),
            cast_members: video.cast_members.into_iter().collect(),
            banner_url: video.banner_url,
        }
    }
}

/// List videos
///
/// Sortable by `title`; `search` matches the title.
#[utoipa::path(
    get,
    path = "/videos",
    tag = "videos",
    params(ListingQuery),
    responses(
        (status = 200, description = "Page of videos", body = ListResponse<VideoResponse>),
        (status = 400, description = "Invalid listing parameters", body = ErrorResponse),
        (status = 500, description = "Search engine failure", body = ErrorResponse)
    )
)]
#[get("/videos")]
pub async fn get_videos_handler(
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_listing(data.videos.as_ref(), query.into_inner(), VideoResponse::from).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value as JsonValue;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::video;
    use crate::tests::support::stubs::StubListUseCase;

    #[actix_web::test]
    async fn test_get_videos_success() {
        let inception = video("Inception");

        let app_state = TestAppStateBuilder::default()
            .with_videos(StubListUseCase::returning(vec![inception.clone()]))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_videos_handler)).await;

        let req = test::TestRequest::get().uri("/videos?search=incep").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "Inception");
        assert_eq!(body["data"][0]["rating"], "AGE_12");
        assert_eq!(body["data"][0]["launch_year"], 2010);
        assert_eq!(body["meta"]["sort"], "title");
    }

    #[actix_web::test]
    async fn test_get_videos_rejects_name_sort() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(app_state).service(get_videos_handler)).await;

        let req = test::TestRequest::get().uri("/videos?sort=name").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
