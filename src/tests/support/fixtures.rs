use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::cast_member::application::domain::entities::{CastMember, CastMemberType};
use crate::category::application::domain::entities::Category;
use crate::genre::application::domain::entities::Genre;
use crate::video::application::domain::entities::{Rating, Video};

/// Fixed timestamp so fixtures survive a JSON round-trip unchanged.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn category(name: &str, description: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        is_active: true,
    }
}

pub fn movie_category() -> Category {
    category("Filme", "Categoria de filmes")
}

pub fn series_category() -> Category {
    category("Séries", "Categoria de séries")
}

pub fn documentary_category() -> Category {
    category("Documentários", "Categoria de documentários")
}

pub fn cast_member(name: &str, member_type: CastMemberType) -> CastMember {
    CastMember {
        id: Uuid::new_v4(),
        name: name.to_string(),
        member_type,
        created_at: timestamp(),
        updated_at: timestamp(),
        is_active: true,
    }
}

pub fn genre(name: &str, categories: BTreeSet<Uuid>) -> Genre {
    Genre {
        id: Uuid::new_v4(),
        name: name.to_string(),
        categories,
        created_at: timestamp(),
        updated_at: timestamp(),
        is_active: true,
    }
}

pub fn video(title: &str) -> Video {
    Video {
        id: Uuid::new_v4(),
        title: title.to_string(),
        launch_year: 2010,
        rating: Rating::Age12,
        categories: BTreeSet::from([Uuid::new_v4()]),
        genres: BTreeSet::from([Uuid::new_v4()]),
        cast_members: BTreeSet::from([Uuid::new_v4(), Uuid::new_v4()]),
        banner_url: Some("https://cdn.example.com/banners/inception.png".to_string()),
        created_at: timestamp(),
        updated_at: timestamp(),
        is_active: true,
    }
}
