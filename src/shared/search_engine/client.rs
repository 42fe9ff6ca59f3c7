use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

/// One raw document returned by the engine for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index", default)]
    pub index: String,

    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "_source", default)]
    pub source: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}

impl SearchResponse {
    pub fn from_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            hits: SearchHits { hits },
        }
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits.hits
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchEngineError {
    #[error("Index {0} not found")]
    IndexNotFound(String),

    #[error("Search engine unreachable: {0}")]
    Transport(String),

    #[error("Search engine answered {status}: {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    #[error("Could not decode search engine response: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Client seam
// ──────────────────────────────────────────────────────────
//

/// Thin view of the search engine used by the repositories.
///
/// Production code talks to Elasticsearch over HTTP; tests plug in an
/// in-memory fake.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    async fn search(&self, index: &str, body: Value) -> Result<SearchResponse, SearchEngineError>;

    /// Creates or replaces the document stored under `id`.
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), SearchEngineError>;

    async fn ping(&self) -> Result<(), SearchEngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_engine_response() {
        let raw = json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": {"value": 1, "relation": "eq"},
                "max_score": 1.0,
                "hits": [{
                    "_index": "catalog-db.codeflix.categories",
                    "_id": "abc",
                    "_score": 1.0,
                    "_source": {"name": "Filme"}
                }]
            }
        });

        let response: SearchResponse = serde_json::from_value(raw).unwrap();
        let hits = response.into_hits();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, "catalog-db.codeflix.categories");
        assert_eq!(hits[0].id, "abc");
        assert_eq!(hits[0].source, json!({"name": "Filme"}));
    }

    #[test]
    fn missing_hits_decode_as_empty() {
        let response: SearchResponse = serde_json::from_value(json!({"took": 1})).unwrap();
        assert!(response.into_hits().is_empty());
    }
}
