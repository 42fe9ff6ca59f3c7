use std::sync::Arc;

use actix_web::web;

use crate::cast_member::application::domain::entities::CastMember;
use crate::category::application::domain::entities::Category;
use crate::genre::application::domain::entities::Genre;
use crate::shared::listing::ListUseCase;
use crate::tests::support::stubs::StubListUseCase;
use crate::video::application::domain::entities::Video;
use crate::AppState;

pub struct TestAppStateBuilder {
    categories: Arc<dyn ListUseCase<Category> + Send + Sync>,
    cast_members: Arc<dyn ListUseCase<CastMember> + Send + Sync>,
    genres: Arc<dyn ListUseCase<Genre> + Send + Sync>,
    videos: Arc<dyn ListUseCase<Video> + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            categories: Arc::new(StubListUseCase::<Category>::default()),
            cast_members: Arc::new(StubListUseCase::<CastMember>::default()),
            genres: Arc::new(StubListUseCase::<Genre>::default()),
            videos: Arc::new(StubListUseCase::<Video>::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_categories(
        mut self,
        uc: impl ListUseCase<Category> + Send + Sync + 'static,
    ) -> Self {
        self.categories = Arc::new(uc);
        self
    }

    pub fn with_cast_members(
        mut self,
        uc: impl ListUseCase<CastMember> + Send + Sync + 'static,
    ) -> Self {
        self.cast_members = Arc::new(uc);
        self
    }

    pub fn with_genres(mut self, uc: impl ListUseCase<Genre> + Send + Sync + 'static) -> Self {
        self.genres = Arc::new(uc);
        self
    }

    pub fn with_videos(mut self, uc: impl ListUseCase<Video> + Send + Sync + 'static) -> Self {
        self.videos = Arc::new(uc);
        self
    }

    pub fn build_state(self) -> AppState {
        AppState {
            categories: self.categories,
            cast_members: self.cast_members,
            genres: self.genres,
            videos: self.videos,
        }
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.build_state())
    }
}
