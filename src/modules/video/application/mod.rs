pub mod domain;
pub mod list_videos;
pub mod ports;
