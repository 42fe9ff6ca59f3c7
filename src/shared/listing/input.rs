use std::fmt;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGINATION_SIZE: u32 = 5;
pub const MAX_PAGINATION_SIZE: u32 = 100;
/// Deepest result offset the search engine serves (`index.max_result_window`).
pub const MAX_RESULT_WINDOW: u32 = 10_000;

//
// ──────────────────────────────────────────────────────────
// Sorting
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed enum of attributes a collection can be ordered by.
///
/// `Default` is the field used when the caller does not pick one.
pub trait SortableField:
    Copy + Default + Debug + PartialEq + Eq + Serialize + Send + Sync + 'static
{
    const ALL: &'static [Self];

    /// Attribute name as stored in the search index.
    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == value.trim())
    }

    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Parameters exactly as they arrive from a transport, before validation.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingInputError {
    #[error("page must be greater than or equal to 1, got {0}")]
    InvalidPage(i64),

    #[error("per_page must be between 1 and {max}, got {0}", max = MAX_PAGINATION_SIZE)]
    InvalidPerPage(i64),

    #[error("cannot sort by '{value}', allowed fields: {allowed}")]
    InvalidSortField { value: String, allowed: String },

    #[error("direction must be 'asc' or 'desc', got '{0}'")]
    InvalidDirection(String),

    #[error(
        "page {page} with per_page {per_page} reaches past the first {max} results",
        max = MAX_RESULT_WINDOW
    )]
    PageOutOfReach { page: u32, per_page: u32 },
}

impl ListingInputError {
    pub fn code(&self) -> &'static str {
        match self {
            ListingInputError::InvalidPage(_) | ListingInputError::PageOutOfReach { .. } => {
                "INVALID_PAGE"
            }
            ListingInputError::InvalidPerPage(_) => "INVALID_PER_PAGE",
            ListingInputError::InvalidSortField { .. } => "INVALID_SORT_FIELD",
            ListingInputError::InvalidDirection(_) => "INVALID_DIRECTION",
        }
    }
}

/// Validated listing request. Absent values stay absent here; the list
/// use case decides the effective defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingInput<S> {
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
    sort: Option<S>,
    direction: Option<SortDirection>,
}

impl<S> Default for ListingInput<S> {
    fn default() -> Self {
        Self {
            search: None,
            page: None,
            per_page: None,
            sort: None,
            direction: None,
        }
    }
}

impl<S: SortableField> ListingInput<S> {
    pub fn parse(params: ListingParams) -> Result<Self, ListingInputError> {
        let page = params
            .page
            .map(|page| {
                u32::try_from(page)
                    .ok()
                    .filter(|page| *page >= 1)
                    .ok_or(ListingInputError::InvalidPage(page))
            })
            .transpose()?;

        let per_page = params
            .per_page
            .map(|per_page| {
                u32::try_from(per_page)
                    .ok()
                    .filter(|per_page| (1..=MAX_PAGINATION_SIZE).contains(per_page))
                    .ok_or(ListingInputError::InvalidPerPage(per_page))
            })
            .transpose()?;

        if let Some(page) = page {
            let effective_per_page = per_page.unwrap_or(DEFAULT_PAGINATION_SIZE);
            if u64::from(page) * u64::from(effective_per_page) > u64::from(MAX_RESULT_WINDOW) {
                return Err(ListingInputError::PageOutOfReach {
                    page,
                    per_page: effective_per_page,
                });
            }
        }

        let sort = params
            .sort
            .map(|sort| {
                S::parse(&sort).ok_or_else(|| ListingInputError::InvalidSortField {
                    value: sort,
                    allowed: S::allowed(),
                })
            })
            .transpose()?;

        let direction = params
            .direction
            .map(|direction| {
                SortDirection::parse(&direction)
                    .ok_or(ListingInputError::InvalidDirection(direction))
            })
            .transpose()?;

        let search = params
            .search
            .map(|search| search.trim().to_string())
            .filter(|search| !search.is_empty());

        Ok(Self {
            search,
            page,
            per_page,
            sort,
            direction,
        })
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    pub fn sort(&self) -> Option<S> {
        self.sort
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }
}
