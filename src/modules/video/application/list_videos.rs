use crate::shared::listing::ListService;
use crate::video::application::domain::entities::Video;

pub type ListVideosService<R> = ListService<Video, R>;
