mod get_videos;

pub use get_videos::*;
