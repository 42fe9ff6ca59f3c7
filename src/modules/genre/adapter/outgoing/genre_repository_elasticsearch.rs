use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::genre::application::domain::entities::{Genre, GenreSortableField};
use crate::shared::listing::{ListingRepository, ListingRepositoryError, SortDirection};
use crate::shared::search_engine::{
    search_hits, ElasticsearchRepository, SearchEngineClient, SearchHit, SearchIndexed,
};

pub const GENRES_INDEX: &str = "catalog-db.codeflix.genres";
pub const GENRE_CATEGORIES_INDEX: &str = "catalog-db.codeflix.genre_categories";

/// Upper bound on link documents fetched for one page of genres.
const MAX_CATEGORY_LINKS: u32 = 10_000;

impl SearchIndexed for Genre {
    const INDEX: &'static str = GENRES_INDEX;
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];
}

/// One row of the genre/category join index.
#[derive(Debug, Deserialize)]
struct GenreCategoryLink {
    genre_id: Uuid,
    category_id: Uuid,
}

/// Lists genres and fills in the categories linked to them through the
/// join index.
#[derive(Clone)]
pub struct GenreRepositoryElasticsearch {
    genres: ElasticsearchRepository<Genre>,
}

impl GenreRepositoryElasticsearch {
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            genres: ElasticsearchRepository::new(client),
        }
    }

    async fn linked_categories(
        &self,
        genre_ids: Vec<String>,
    ) -> Result<HashMap<Uuid, BTreeSet<Uuid>>, ListingRepositoryError> {
        let body = json!({
            "size": MAX_CATEGORY_LINKS,
            "query": {
                "terms": { "genre_id.keyword": genre_ids }
            }
        });

        let hits = search_hits(
            self.genres.client().as_ref(),
            GENRE_CATEGORIES_INDEX,
            body,
        )
        .await?;

        let mut links: HashMap<Uuid, BTreeSet<Uuid>> = HashMap::new();
        for link in hits.iter().filter_map(parse_link) {
            links
                .entry(link.genre_id)
                .or_default()
                .insert(link.category_id);
        }

        Ok(links)
    }
}

fn parse_link(hit: &SearchHit) -> Option<GenreCategoryLink> {
    match serde_json::from_value(hit.source.clone()) {
        Ok(link) => Some(link),
        Err(err) => {
            warn!(
                hit_id = %hit.id,
                error = %err,
                hit = %hit.source,
                "Malformed genre category link skipped"
            );
            None
        }
    }
}

#[async_trait]
impl ListingRepository<Genre> for GenreRepositoryElasticsearch {
    async fn search(
        &self,
        page: u32,
        per_page: u32,
        search: Option<String>,
        sort: Option<GenreSortableField>,
        direction: SortDirection,
    ) -> Result<Vec<Genre>, ListingRepositoryError> {
        let mut genres = self
            .genres
            .search(page, per_page, search, sort, direction)
            .await?;

        if genres.is_empty() {
            return Ok(genres);
        }

        let ids = genres.iter().map(|genre| genre.id.to_string()).collect();
        let mut links = self.linked_categories(ids).await?;

        for genre in &mut genres {
            if let Some(categories) = links.remove(&genre.id) {
                genre.categories.extend(categories);
            }
        }

        Ok(genres)
    }
}
