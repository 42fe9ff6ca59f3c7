use crate::cast_member::application::domain::entities::CastMember;
use crate::shared::search_engine::{ElasticsearchRepository, SearchIndexed};

pub const CAST_MEMBERS_INDEX: &str = "catalog-db.codeflix.cast_members";

impl SearchIndexed for CastMember {
    const INDEX: &'static str = CAST_MEMBERS_INDEX;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "type"];
}

pub type CastMemberRepositoryElasticsearch = ElasticsearchRepository<CastMember>;
