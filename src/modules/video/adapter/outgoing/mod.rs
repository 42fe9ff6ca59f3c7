mod video_repository_elasticsearch;

pub use video_repository_elasticsearch::{VideoRepositoryElasticsearch, VIDEOS_INDEX};
