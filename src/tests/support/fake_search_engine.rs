use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::search_engine::{
    SearchEngineClient, SearchEngineError, SearchHit, SearchResponse,
};

/// In-memory stand-in for the search engine.
///
/// Search answers come from, in order: a forced failure, canned hits for
/// the index, documents written through `index_document`. An index with
/// none of those behaves like a missing index.
#[derive(Default)]
pub struct FakeSearchEngine {
    searches: Mutex<Vec<(String, Value)>>,
    canned_hits: Mutex<HashMap<String, Vec<SearchHit>>>,
    documents: Mutex<HashMap<String, Vec<(String, Value)>>>,
    index_failures: Mutex<HashMap<String, SearchEngineError>>,
    failure: Mutex<Option<SearchEngineError>>,
    ping_result: Mutex<Option<SearchEngineError>>,
}

impl FakeSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with_hits(&self, index: &str, hits: Vec<SearchHit>) {
        self.canned_hits
            .lock()
            .unwrap()
            .insert(index.to_string(), hits);
    }

    pub fn respond_with_sources(&self, index: &str, sources: Vec<Value>) {
        let hits = sources
            .into_iter()
            .enumerate()
            .map(|(position, source)| SearchHit {
                index: index.to_string(),
                id: source["id"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| position.to_string()),
                source,
            })
            .collect();

        self.respond_with_hits(index, hits);
    }

    /// Every call fails with `err`.
    pub fn fail_with(&self, err: SearchEngineError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Searches against `index` fail with `err`.
    pub fn fail_index_with(&self, index: &str, err: SearchEngineError) {
        self.index_failures
            .lock()
            .unwrap()
            .insert(index.to_string(), err);
    }

    pub fn fail_ping_with(&self, err: SearchEngineError) {
        *self.ping_result.lock().unwrap() = Some(err);
    }

    pub fn searches(&self) -> Vec<(String, Value)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn last_search(&self) -> Option<(String, Value)> {
        self.searches.lock().unwrap().last().cloned()
    }

    pub fn stored_document(&self, index: &str, id: &str) -> Option<Value> {
        self.documents
            .lock()
            .unwrap()
            .get(index)
            .and_then(|docs| docs.iter().find(|(doc_id, _)| doc_id == id))
            .map(|(_, doc)| doc.clone())
    }
}

#[async_trait]
impl SearchEngineClient for FakeSearchEngine {
    async fn search(&self, index: &str, body: Value) -> Result<SearchResponse, SearchEngineError> {
        self.searches
            .lock()
            .unwrap()
            .push((index.to_string(), body));

        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }

        if let Some(err) = self.index_failures.lock().unwrap().get(index).cloned() {
            return Err(err);
        }

        if let Some(hits) = self.canned_hits.lock().unwrap().get(index).cloned() {
            return Ok(SearchResponse::from_hits(hits));
        }

        match self.documents.lock().unwrap().get(index) {
            Some(docs) => Ok(SearchResponse::from_hits(
                docs.iter()
                    .map(|(id, source)| SearchHit {
                        index: index.to_string(),
                        id: id.clone(),
                        source: source.clone(),
                    })
                    .collect(),
            )),
            None => Err(SearchEngineError::IndexNotFound(index.to_string())),
        }
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), SearchEngineError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }

        let mut documents = self.documents.lock().unwrap();
        let docs = documents.entry(index.to_string()).or_default();

        match docs.iter_mut().find(|(doc_id, _)| doc_id == id) {
            Some((_, existing)) => *existing = document,
            None => docs.push((id.to_string(), document)),
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), SearchEngineError> {
        match self.ping_result.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
