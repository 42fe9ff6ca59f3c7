use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::shared::domain::CatalogEntity;
use crate::shared::listing::{
    EntityListOutput, ListError, ListOutput, ListOutputMeta, ListUseCase, ListingInput,
    DEFAULT_PAGE, DEFAULT_PAGINATION_SIZE,
};

/// Listing use case with a canned result.
///
/// The metadata echoes the received input with the usual defaults, so
/// handlers can be checked end to end without a repository.
#[derive(Clone)]
pub struct StubListUseCase<E: CatalogEntity> {
    result: Result<Vec<E>, ListError>,
    received: Arc<Mutex<Vec<ListingInput<E::SortField>>>>,
}

impl<E: CatalogEntity> Default for StubListUseCase<E> {
    fn default() -> Self {
        Self::returning(Vec::new())
    }
}

impl<E: CatalogEntity> StubListUseCase<E> {
    pub fn returning(data: Vec<E>) -> Self {
        Self {
            result: Ok(data),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: ListError) -> Self {
        Self {
            result: Err(err),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<ListingInput<E::SortField>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl<E: CatalogEntity> ListUseCase<E> for StubListUseCase<E> {
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
        self.received.lock().unwrap().push(input);

        let data = self.result.clone()?;
        Ok(ListOutput { data, meta })
    }
}
