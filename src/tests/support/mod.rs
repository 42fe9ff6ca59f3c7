pub mod app_state_builder;
pub mod fake_search_engine;
pub mod fixtures;
pub mod log_capture;
pub mod stubs;
