use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::client::{SearchEngineClient, SearchEngineError, SearchResponse};

/// Elasticsearch REST client. One instance is shared read-only by every
/// repository; `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl ElasticsearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn transport_error(err: reqwest::Error) -> SearchEngineError {
    SearchEngineError::Transport(err.to_string())
}

/// Maps a non-2xx answer. A 404 on an index-scoped call means the index
/// itself does not exist.
fn status_error(index: &str, status: StatusCode, body: String) -> SearchEngineError {
    if status == StatusCode::NOT_FOUND {
        return SearchEngineError::IndexNotFound(index.to_string());
    }

    SearchEngineError::UnexpectedStatus {
        status: status.as_u16(),
        reason: body,
    }
}

#[async_trait]
impl SearchEngineClient for ElasticsearchClient {
    async fn search(&self, index: &str, body: Value) -> Result<SearchResponse, SearchEngineError> {
        let response = self
            .http
            .post(self.endpoint(&format!("{index}/_search")))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(index, status, body));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchEngineError::Decode(e.to_string()))
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), SearchEngineError> {
        let response = self
            .http
            .put(self.endpoint(&format!("{index}/_doc/{id}")))
            .json(&document)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Indexing auto-creates the index, so 404 is not "missing index" here.
            return Err(SearchEngineError::UnexpectedStatus {
                status: status.as_u16(),
                reason: body,
            });
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), SearchEngineError> {
        let response = self
            .http
            .get(self.endpoint(""))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SearchEngineError::UnexpectedStatus {
                status: status.as_u16(),
                reason: response.text().await.unwrap_or_default(),
            })
        }
    }
}
