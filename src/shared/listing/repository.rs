use async_trait::async_trait;

use super::input::SortDirection;
use crate::shared::domain::CatalogEntity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingRepositoryError {
    #[error("Search engine error: {0}")]
    SearchEngine(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, one per entity kind)
// ──────────────────────────────────────────────────────────
//

/// Paginated, sorted, optionally filtered read of one collection.
///
/// `page` starts at 1. A `None` sort leaves ordering to the store.
#[async_trait]
pub trait ListingRepository<E: CatalogEntity>: Send + Sync {
    async fn search(
        &self,
        page: u32,
        per_page: u32,
        search: Option<String>,
        sort: Option<E::SortField>,
        direction: SortDirection,
    ) -> Result<Vec<E>, ListingRepositoryError>;
}
