use crate::shared::listing::SortableField;

/// Longest accepted name/title on any catalog entity.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Read-only record observed from the catalog store.
///
/// Every listable collection (categories, cast members, genres, videos)
/// implements this once; the listing use case and the search-engine
/// repository are generic over it.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Closed set of attributes the collection may be sorted by.
    type SortField: SortableField;

    /// Singular, human readable kind used in log lines.
    const KIND: &'static str;

    fn validate(&self) -> Result<(), EntityValidationError>;
}

/// Shared rule for `name`/`title` style fields.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), EntityValidationError> {
    if value.trim().is_empty() {
        return Err(EntityValidationError::EmptyField(field));
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(EntityValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}
