mod input;
mod output;
mod repository;
mod service;

pub use input::{
    ListingInput, ListingInputError, ListingParams, SortDirection, SortableField, DEFAULT_PAGE,
    DEFAULT_PAGINATION_SIZE, MAX_PAGINATION_SIZE,
};
pub use output::{ListOutput, ListOutputMeta};
pub use repository::{ListingRepository, ListingRepositoryError};
pub use service::{EntityListOutput, ListError, ListService, ListUseCase};
