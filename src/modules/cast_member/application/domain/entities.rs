use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::domain::{validate_name, CatalogEntity, EntityValidationError};
use crate::shared::listing::SortableField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMemberType::Actor => "ACTOR",
            CastMemberType::Director => "DIRECTOR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastMemberSortableField {
    #[default]
    Name,
    Type,
}

impl SortableField for CastMemberSortableField {
    const ALL: &'static [Self] = &[CastMemberSortableField::Name, CastMemberSortableField::Type];

    fn as_str(&self) -> &'static str {
        match self {
            CastMemberSortableField::Name => "name",
            CastMemberSortableField::Type => "type",
        }
    }
}

impl CatalogEntity for CastMember {
    type SortField = CastMemberSortableField;
    const KIND: &'static str = "cast member";

    // The type is closed by deserialization; only the name needs checking.
    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_name("name", &self.name)
    }
}
