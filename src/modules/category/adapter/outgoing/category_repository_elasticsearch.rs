use crate::category::application::domain::entities::Category;
use crate::shared::search_engine::{ElasticsearchRepository, SearchIndexed};

pub const CATEGORIES_INDEX: &str = "catalog-db.codeflix.categories";

impl SearchIndexed for Category {
    const INDEX: &'static str = CATEGORIES_INDEX;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];
}

pub type CategoryRepositoryElasticsearch = ElasticsearchRepository<Category>;
