use async_graphql::{Enum, OutputType, SimpleObject};
use uuid::Uuid;

use crate::cast_member::application::domain::entities::{CastMember, CastMemberSortableField};
use crate::category::application::domain::entities::{Category, CategorySortableField};
use crate::genre::application::domain::entities::{Genre, GenreSortableField};
use crate::shared::listing::{ListOutput, SortDirection, SortableField};
use crate::video::application::domain::entities::{Video, VideoSortableField};

//
// ──────────────────────────────────────────────────────────
// Entities
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Category", rename_fields = "snake_case")]
pub struct CategoryObject {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryObject {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "CastMember", rename_fields = "snake_case")]
pub struct CastMemberObject {
    pub id: Uuid,
    pub name: String,
    #[graphql(name = "type")]
    pub member_type: String,
}

impl From<CastMember> for CastMemberObject {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            member_type: member.member_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Genre", rename_fields = "snake_case")]
pub struct GenreObject {
    pub id: Uuid,
    pub name: String,
    pub categories: Vec<Uuid>,
}

impl From<Genre> for GenreObject {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            categories: genre.categories.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Video", rename_fields = "snake_case")]
pub struct VideoObject {
    pub id: Uuid,
    pub title: String,
    pub launch_year: i32,
    pub rating: String,
    pub categories: Vec<Uuid>,
    pub genres: Vec<Uuid>,
    pub cast_members: Vec<Uuid>,
    pub banner_url: Option<String>,
}

impl From<Video> for VideoObject {
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

//
// ──────────────────────────────────────────────────────────
// Arguments
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CategorySortField {
    Name,
    Description,
}

impl From<CategorySortField> for CategorySortableField {
    fn from(field: CategorySortField) -> Self {
        match field {
            CategorySortField::Name => CategorySortableField::Name,
            CategorySortField::Description => CategorySortableField::Description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CastMemberSortField {
    Name,
    Type,
}

impl From<CastMemberSortField> for CastMemberSortableField {
    fn from(field: CastMemberSortField) -> Self {
        match field {
            CastMemberSortField::Name => CastMemberSortableField::Name,
            CastMemberSortField::Type => CastMemberSortableField::Type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum GenreSortField {
    Name,
}

impl From<GenreSortField> for GenreSortableField {
    fn from(field: GenreSortField) -> Self {
        match field {
            GenreSortField::Name => GenreSortableField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum VideoSortField {
    Title,
}

impl From<VideoSortField> for VideoSortableField {
    fn from(field: VideoSortField) -> Self {
        match field {
            VideoSortField::Title => VideoSortableField::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(name = "SortDirection")]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing envelope
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Meta", rename_fields = "snake_case")]
pub struct MetaObject {
    pub page: u32,
    pub per_page: u32,
    pub sort: String,
    pub direction: String,
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(
    rename_fields = "snake_case",
    concrete(name = "CategoryResult", params(CategoryObject)),
    concrete(name = "CastMemberResult", params(CastMemberObject)),
    concrete(name = "GenreResult", params(GenreObject)),
    concrete(name = "VideoResult", params(VideoObject))
)]
pub struct ListResult<T: OutputType> {
    pub data: Vec<T>,
    pub meta: MetaObject,
}

impl<T: OutputType> ListResult<T> {
    pub fn from_output<E, S: SortableField>(
        output: ListOutput<E, S>,
        to_object: impl FnMut(E) -> T,
    ) -> Self {
        let output = output.map(to_object);

        Self {
            data: output.data,
            meta: MetaObject {
                page: output.meta.page,
                per_page: output.meta.per_page,
                sort: output.meta.sort.as_str().to_string(),
                direction: output.meta.direction.to_string(),
            },
        }
    }
}
