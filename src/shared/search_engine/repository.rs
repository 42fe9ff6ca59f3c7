use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::client::{SearchEngineClient, SearchEngineError, SearchHit};
use super::query::build_search_body;
use crate::shared::domain::{CatalogEntity, EntityValidationError};
use crate::shared::listing::{ListingRepository, ListingRepositoryError, SortDirection};

/// Binds an entity to the index holding it and the fields free-text
/// search runs against. The mapping is static, not configuration.
pub trait SearchIndexed: CatalogEntity + DeserializeOwned {
    const INDEX: &'static str;
    const SEARCH_FIELDS: &'static [&'static str];
}

impl From<SearchEngineError> for ListingRepositoryError {
    fn from(err: SearchEngineError) -> Self {
        ListingRepositoryError::SearchEngine(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HitParseError {
    #[error("document does not match schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("document failed validation: {0}")]
    Invalid(#[from] EntityValidationError),
}

/// Runs a query and returns its raw hits.
///
/// A missing index is reported as an empty result, never as an error:
/// an index that was never created simply holds no data yet.
pub async fn search_hits(
    client: &dyn SearchEngineClient,
    index: &str,
    body: Value,
) -> Result<Vec<SearchHit>, ListingRepositoryError> {
    match client.search(index, body).await {
        Ok(response) => Ok(response.into_hits()),
        Err(SearchEngineError::IndexNotFound(_)) => {
            warn!(
                index = index,
                "Index not found, returning empty result (check the index name if data is expected)"
            );
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn parse_hit<E>(hit: &SearchHit) -> Result<E, HitParseError>
where
    E: CatalogEntity + DeserializeOwned,
{
    let entity: E = serde_json::from_value(hit.source.clone())?;
    entity.validate()?;
    Ok(entity)
}

/// Builds entities from hits. A hit that cannot be turned into an entity
/// is logged and dropped; it never fails the whole page.
pub fn parse_hits<E>(hits: Vec<SearchHit>) -> Vec<E>
where
    E: CatalogEntity + DeserializeOwned,
{
    hits.into_iter()
        .filter_map(|hit| match parse_hit::<E>(&hit) {
            Ok(entity) => Some(entity),
            Err(err) => {
                warn!(
                    kind = E::KIND,
                    hit_id = %hit.id,
                    error = %err,
                    hit = %hit.source,
                    "Malformed {} skipped",
                    E::KIND
                );
                None
            }
        })
        .collect()
}

// ============================================================================
// Repository
// ============================================================================

/// Listing repository for any entity with a fixed search index.
pub struct ElasticsearchRepository<E> {
    client: Arc<dyn SearchEngineClient>,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ElasticsearchRepository<E> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            entity: PhantomData,
        }
    }
}

impl<E: SearchIndexed> ElasticsearchRepository<E> {
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }

    pub fn client(&self) -> &Arc<dyn SearchEngineClient> {
        &self.client
    }
}

#[async_trait]
impl<E: SearchIndexed> ListingRepository<E> for ElasticsearchRepository<E> {
    async fn search(
        &self,
        page: u32,
        per_page: u32,
        search: Option<String>,
        sort: Option<E::SortField>,
        direction: SortDirection,
    ) -> Result<Vec<E>, ListingRepositoryError> {
        let body = build_search_body(
            page,
            per_page,
            search.as_deref(),
            sort,
            direction,
            E::SEARCH_FIELDS,
        );

        let hits = search_hits(self.client.as_ref(), E::INDEX, body).await?;

        Ok(parse_hits(hits))
    }
}
