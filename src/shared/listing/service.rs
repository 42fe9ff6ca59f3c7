use std::marker::PhantomData;

use async_trait::async_trait;

use super::input::{ListingInput, DEFAULT_PAGE, DEFAULT_PAGINATION_SIZE};
use super::output::{ListOutput, ListOutputMeta};
use super::repository::{ListingRepository, ListingRepositoryError};
use crate::shared::domain::CatalogEntity;

pub type EntityListOutput<E> = ListOutput<E, <E as CatalogEntity>::SortField>;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ListingRepositoryError> for ListError {
    fn from(err: ListingRepositoryError) -> Self {
        match err {
            ListingRepositoryError::SearchEngine(msg) => ListError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListUseCase<E: CatalogEntity>: Send + Sync {
    async fn execute(
        &self,
        input: ListingInput<E::SortField>,
    ) -> Result<EntityListOutput<E>, ListError>;
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Lists one collection: fills in defaults, asks the repository, and
/// reports the effective parameters alongside the page.
pub struct ListService<E, R>
where
    E: CatalogEntity,
    R: ListingRepository<E>,
{
    repository: R,
    entity: PhantomData<fn() -> E>,
}

impl<E, R> ListService<E, R>
where
    E: CatalogEntity,
    R: ListingRepository<E>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            entity: PhantomData,
        }
    }
}

impl<E, R> Clone for ListService<E, R>
where
    E: CatalogEntity,
    R: ListingRepository<E> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

#[async_trait]
impl<E, R> ListUseCase<E> for ListService<E, R>
where
    E: CatalogEntity,
    R: ListingRepository<E>,
{
    async fn execute(
        &self,
        input: ListingInput<E::SortField>,
    ) -> Result<EntityListOutput<E>, ListError> {
        let meta = ListOutputMeta {
            page: input.page().unwrap_or(DEFAULT_PAGE),
            per_page: input.per_page().unwrap_or(DEFAULT_PAGINATION_SIZE),
            sort: input.sort().unwrap_or_default(),
            direction: input.direction().unwrap_or_default(),
        };

        let data = self
            .repository
            .search(
                meta.page,
                meta.per_page,
                input.search().map(str::to_string),
                Some(meta.sort),
                meta.direction,
            )
            .await?;

        Ok(ListOutput { data, meta })
    }
}
