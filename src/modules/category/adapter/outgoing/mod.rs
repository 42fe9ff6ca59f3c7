mod category_repository_elasticsearch;

pub use category_repository_elasticsearch::{CategoryRepositoryElasticsearch, CATEGORIES_INDEX};
