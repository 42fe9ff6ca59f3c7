use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::{validate_name, CatalogEntity, EntityValidationError};
use crate::shared::listing::SortableField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySortableField {
    #[default]
    Name,
    Description,
}

impl SortableField for CategorySortableField {
    const ALL: &'static [Self] = &[
        CategorySortableField::Name,
        CategorySortableField::Description,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CategorySortableField::Name => "name",
            CategorySortableField::Description => "description",
        }
    }
}

impl CatalogEntity for Category {
    type SortField = CategorySortableField;
    const KIND: &'static str = "category";

    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_name("name", &self.name)
    }
}
