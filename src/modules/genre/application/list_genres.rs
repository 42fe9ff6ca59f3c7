use crate::genre::application::domain::entities::Genre;
use crate::shared::listing::ListService;

pub type ListGenresService<R> = ListService<Genre, R>;
