pub mod video_repository;
