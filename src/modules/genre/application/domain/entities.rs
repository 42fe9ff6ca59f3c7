use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::{validate_name, CatalogEntity, EntityValidationError};
use crate::shared::listing::SortableField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    /// Ids of the categories this genre belongs to.
    #[serde(default)]
    pub categories: BTreeSet<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreSortableField {
    #[default]
    Name,
}

impl SortableField for GenreSortableField {
    const ALL: &'static [Self] = &[GenreSortableField::Name];

    fn as_str(&self) -> &'static str {
        match self {
            GenreSortableField::Name => "name",
        }
    }
}

impl CatalogEntity for Genre {
    type SortField = GenreSortableField;
    const KIND: &'static str = "genre";

    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_name("name", &self.name)
    }
}
