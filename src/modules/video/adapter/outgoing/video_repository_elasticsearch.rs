use async_trait::async_trait;

use crate::shared::listing::ListingRepositoryError;
use crate::shared::search_engine::{ElasticsearchRepository, SearchIndexed};
use crate::video::application::domain::entities::Video;
use crate::video::application::ports::outgoing::video_repository::VideoRepository;

pub const VIDEOS_INDEX: &str = "catalog-db.codeflix.videos";

impl SearchIndexed for Video {
    const INDEX: &'static str = VIDEOS_INDEX;
    const SEARCH_FIELDS: &'static [&'static str] = &["title"];
}

pub type VideoRepositoryElasticsearch = ElasticsearchRepository<Video>;

#[async_trait]
impl VideoRepository for ElasticsearchRepository<Video> {
    async fn save(&self, video: &Video) -> Result<(), ListingRepositoryError> {
        let document = serde_json::to_value(video)
            .map_err(|e| ListingRepositoryError::SearchEngine(e.to_string()))?;

        self.client()
            .index_document(VIDEOS_INDEX, &video.id.to_string(), document)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use serde_json::json;

    use crate::shared::listing::{ListingRepository, SortDirection};
    use crate::shared::search_engine::SearchEngineError;
    use crate::tests::support::fake_search_engine::FakeSearchEngine;
    use crate::tests::support::fixtures::video;
    use crate::video::application::domain::entities::VideoSortableField;

    #[tokio::test]
    async fn saved_video_is_listed() {
        let fake = Arc::new(FakeSearchEngine::new());
        let repository = VideoRepositoryElasticsearch::new(fake.clone());
        let inception = video("Inception");

        repository.save(&inception).await.unwrap();

        let stored = fake
            .stored_document(VIDEOS_INDEX, &inception.id.to_string())
            .unwrap();
        assert_eq!(stored["title"], "Inception");
        assert_eq!(stored["rating"], "AGE_12");

        let listed = repository
            .search(1, 5, None, None, SortDirection::Asc)
            .await
            .unwrap();
        assert_eq!(listed, vec![inception]);
    }

    #[tokio::test]
    async fn saving_twice_replaces_the_document() {
        let fake = Arc::new(FakeSearchEngine::new());
        let repository = VideoRepositoryElasticsearch::new(fake.clone());

        let mut inception = video("Inception");
        repository.save(&inception).await.unwrap();

        inception.title = "Inception (Director's Cut)".to_string();
        repository.save(&inception).await.unwrap();

        let listed = repository
            .search(1, 5, None, None, SortDirection::Asc)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Inception (Director's Cut)");
    }

    #[tokio::test]
    async fn save_failure_is_returned() {
        let fake = Arc::new(FakeSearchEngine::new());
        fake.fail_with(SearchEngineError::Transport("connection refused".to_string()));
        let repository = VideoRepositoryElasticsearch::new(fake);

        let result = repository.save(&video("Inception")).await;

        assert!(matches!(result, Err(ListingRepositoryError::SearchEngine(_))));
    }

    #[tokio::test]
    async fn searches_title_only() {
        let fake = Arc::new(FakeSearchEngine::new());
        fake.respond_with_sources(VIDEOS_INDEX, vec![]);
        let repository = VideoRepositoryElasticsearch::new(fake.clone());

        repository
            .search(
                1,
                5,
                Some("incep".to_string()),
                Some(VideoSortableField::Title),
                SortDirection::Asc,
            )
            .await
            .unwrap();

        let (_, body) = fake.last_search().unwrap();
        assert_eq!(
            body["query"]["bool"]["must"][0]["multi_match"]["fields"],
            json!(["title"])
        );
        assert_eq!(body["sort"], json!([{"title.keyword": {"order": "asc"}}]));
    }

    #[tokio::test]
    async fn malformed_video_is_skipped() {
        let inception = video("Inception");
        let mut broken = serde_json::to_value(video("Broken")).unwrap();
        broken["launch_year"] = json!(1700);

        let fake = Arc::new(FakeSearchEngine::new());
        fake.respond_with_sources(
            VIDEOS_INDEX,
            vec![broken, serde_json::to_value(&inception).unwrap()],
        );
        let repository = VideoRepositoryElasticsearch::new(fake);

        let listed = repository
            .search(1, 5, None, None, SortDirection::Asc)
            .await
            .unwrap();

        assert_eq!(listed, vec![inception]);
    }
}
