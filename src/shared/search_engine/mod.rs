mod client;
mod elasticsearch_client;
mod query;
mod repository;

pub use client::{SearchEngineClient, SearchEngineError, SearchHit, SearchHits, SearchResponse};
pub use elasticsearch_client::ElasticsearchClient;
pub use query::{build_search_body, offset};
pub use repository::{
    parse_hit, parse_hits, search_hits, ElasticsearchRepository, HitParseError, SearchIndexed,
};
