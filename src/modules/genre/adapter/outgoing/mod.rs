mod genre_repository_elasticsearch;

pub use genre_repository_elasticsearch::{
    GenreRepositoryElasticsearch, GENRES_INDEX, GENRE_CATEGORIES_INDEX,
};
