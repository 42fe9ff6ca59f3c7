mod cast_member_repository_elasticsearch;

pub use cast_member_repository_elasticsearch::{
    CastMemberRepositoryElasticsearch, CAST_MEMBERS_INDEX,
};
