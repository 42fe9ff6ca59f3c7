use async_trait::async_trait;

use crate::shared::listing::{ListingRepository, ListingRepositoryError};
use crate::video::application::domain::entities::Video;

/// Listing plus the single write the catalog performs on videos.
#[async_trait]
pub trait VideoRepository: ListingRepository<Video> {
    /// Inserts or replaces the video under its id.
    async fn save(&self, video: &Video) -> Result<(), ListingRepositoryError>;
}
