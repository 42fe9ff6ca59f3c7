use async_graphql::{Context, ErrorExtensions, Object, OutputType};
use tracing::error;

use super::types::{
    CastMemberObject, CastMemberSortField, CategoryObject, CategorySortField, DirectionArg,
    GenreObject, GenreSortField, ListResult, VideoObject, VideoSortField,
};
use crate::cast_member::application::domain::entities::CastMemberSortableField;
use crate::category::application::domain::entities::CategorySortableField;
use crate::genre::application::domain::entities::GenreSortableField;
use crate::shared::domain::CatalogEntity;
use crate::shared::listing::{
    ListError, ListUseCase, ListingInput, ListingInputError, ListingParams, SortDirection,
    SortableField,
};
use crate::video::application::domain::entities::VideoSortableField;
use crate::AppState;

impl ErrorExtensions for ListingInputError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl ErrorExtensions for ListError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            ListError::QueryFailed(_) => async_graphql::Error::new("An unexpected error occurred")
                .extend_with(|_, e| e.set("code", "INTERNAL_ERROR")),
        }
    }
}

/// Shared resolver body: validate, run the use case, map to transport objects.
async fn list<E, T>(
    use_case: &dyn ListUseCase<E>,
    params: ListingParams,
    to_object: impl FnMut(E) -> T,
) -> async_graphql::Result<ListResult<T>>
where
    E: CatalogEntity,
    T: OutputType,
{
    let input = ListingInput::<E::SortField>::parse(params).map_err(|e| e.extend())?;

    match use_case.execute(input).await {
        Ok(output) => Ok(ListResult::from_output(output, to_object)),
        Err(err) => {
            error!("Failed to list {} entries: {}", E::KIND, err);
            Err(err.extend())
        }
    }
}

// Enum arguments are already closed by the schema; page and per_page still
// go through the shared bounds check.
fn params<S: SortableField>(
    sort: Option<S>,
    search: Option<String>,
    page: Option<i64>,
    per_page: Option<i64>,
    direction: Option<DirectionArg>,
) -> ListingParams {
    ListingParams {
        search,
        page,
        per_page,
        sort: sort.map(|field| field.as_str().to_string()),
        direction: direction.map(|direction| SortDirection::from(direction).as_str().to_string()),
    }
}

pub struct Query;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl Query {
    async fn categories(
        &self,
        ctx: &Context<'_>,
        sort: Option<CategorySortField>,
        search: Option<String>,
        page: Option<i64>,
        per_page: Option<i64>,
        direction: Option<DirectionArg>,
    ) -> async_graphql::Result<ListResult<CategoryObject>> {
        let state = ctx.data::<AppState>()?;
        list(
            state.categories.as_ref(),
            params(sort.map(CategorySortableField::from), search, page, per_page, direction),
            CategoryObject::from,
        )
        .await
    }

    async fn cast_members(
        &self,
        ctx: &Context<'_>,
        sort: Option<CastMemberSortField>,
        search: Option<String>,
        page: Option<i64>,
        per_page: Option<i64>,
        direction: Option<DirectionArg>,
    ) -> async_graphql::Result<ListResult<CastMemberObject>> {
        let state = ctx.data::<AppState>()?;
        list(
            state.cast_members.as_ref(),
            params(sort.map(CastMemberSortableField::from), search, page, per_page, direction),
            CastMemberObject::from,
        )
        .await
    }

    async fn genres(
        &self,
        ctx: &Context<'_>,
        sort: Option<GenreSortField>,
        search: Option<String>,
        page: Option<i64>,
        per_page: Option<i64>,
        direction: Option<DirectionArg>,
    ) -> async_graphql::Result<ListResult<GenreObject>> {
        let state = ctx.data::<AppState>()?;
        list(
            state.genres.as_ref(),
            params(sort.map(GenreSortableField::from), search, page, per_page, direction),
            GenreObject::from,
        )
        .await
    }

    async fn videos(
        &self,
        ctx: &Context<'_>,
        sort: Option<VideoSortField>,
        search: Option<String>,
        page: Option<i64>,
        per_page: Option<i64>,
        direction: Option<DirectionArg>,
    ) -> async_graphql::Result<ListResult<VideoObject>> {
        let state = ctx.data::<AppState>()?;
        list(
            state.videos.as_ref(),
            params(sort.map(VideoSortableField::from), search, page, per_page, direction),
            VideoObject::from,
        )
        .await
    }
}
