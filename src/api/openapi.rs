use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::shared::api::listing::ListMetaResponse;
use utoipa::OpenApi;

use crate::cast_member::adapter::incoming::web::routes::CastMemberResponse;
use crate::category::adapter::incoming::web::routes::CategoryResponse;
use crate::genre::adapter::incoming::web::routes::GenreResponse;
use crate::video::adapter::incoming::web::routes::VideoResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Read-only listing of the video catalog: categories, cast members, genres and videos"
    ),
    paths(
        crate::category::adapter::incoming::web::routes::get_categories_handler,
        crate::cast_member::adapter::incoming::web::routes::get_cast_members_handler,
        crate::genre::adapter::incoming::web::routes::get_genres_handler,
        crate::video::adapter::incoming::web::routes::get_videos_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ListMetaResponse,
            CategoryResponse,
            CastMemberResponse,
            GenreResponse,
            VideoResponse
        )
    ),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "cast_members", description = "Cast member listing"),
        (name = "genres", description = "Genre listing"),
        (name = "videos", description = "Video listing"),
    )
)]
pub struct ApiDoc;
