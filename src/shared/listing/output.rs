use serde::Serialize;

use super::input::SortDirection;

/// Effective query parameters of a listing, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOutputMeta<S> {
    pub page: u32,
    pub per_page: u32,
    pub sort: S,
    pub direction: SortDirection,
}

/// One page of a collection. There is no total count: pagination is
/// offset based and open ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListOutput<T, S> {
    pub data: Vec<T>,
    pub meta: ListOutputMeta<S>,
}

impl<T, S> ListOutput<T, S> {
    /// Converts each item while keeping the metadata untouched.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListOutput<U, S> {
        ListOutput {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
