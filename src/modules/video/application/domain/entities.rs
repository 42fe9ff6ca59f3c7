use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::{validate_name, CatalogEntity, EntityValidationError};
use crate::shared::listing::SortableField;

/// First year a motion picture could have been released.
pub const MIN_LAUNCH_YEAR: i32 = 1888;
pub const MAX_LAUNCH_YEAR: i32 = 2200;

/// Age rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "AGE_10")]
    Age10,
    #[serde(rename = "AGE_12")]
    Age12,
    #[serde(rename = "AGE_14")]
    Age14,
    #[serde(rename = "AGE_16")]
    Age16,
    #[serde(rename = "AGE_18")]
    Age18,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "AGE_10",
            Rating::Age12 => "AGE_12",
            Rating::Age14 => "AGE_14",
            Rating::Age16 => "AGE_16",
            Rating::Age18 => "AGE_18",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub launch_year: i32,
    pub rating: Rating,
    #[serde(default)]
    pub categories: BTreeSet<Uuid>,
    #[serde(default)]
    pub genres: BTreeSet<Uuid>,
    #[serde(default)]
    pub cast_members: BTreeSet<Uuid>,
    #[serde(default)]
    pub banner_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSortableField {
    #[default]
    Title,
}

impl SortableField for VideoSortableField {
    const ALL: &'static [Self] = &[VideoSortableField::Title];

    fn as_str(&self) -> &'static str {
        match self {
            VideoSortableField::Title => "title",
        }
    }
}

impl CatalogEntity for Video {
    type SortField = VideoSortableField;
    const KIND: &'static str = "video";

    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_name("title", &self.title)?;

        if !(MIN_LAUNCH_YEAR..=MAX_LAUNCH_YEAR).contains(&self.launch_year) {
            return Err(EntityValidationError::InvalidValue {
                field: "launch_year",
                reason: format!(
                    "{} is outside {}..={}",
                    self.launch_year, MIN_LAUNCH_YEAR, MAX_LAUNCH_YEAR
                ),
            });
        }

        Ok(())
    }
}
