use serde_json::{json, Value};

use crate::shared::listing::{SortDirection, SortableField};

/// Number of documents skipped before the requested page.
pub fn offset(page: u32, per_page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(per_page)
}

/// Builds the `_search` body for one listing page.
///
/// Pagination is `from`/`size`, sorting targets the non-analyzed
/// `<field>.keyword` sub-field, and a non-empty `search` becomes a
/// `multi_match` over `search_fields`. Anything else matches all documents.
pub fn build_search_body<S: SortableField>(
    page: u32,
    per_page: u32,
    search: Option<&str>,
    sort: Option<S>,
    direction: SortDirection,
    search_fields: &[&str],
) -> Value {
    let sort_clause: Vec<Value> = sort
        .map(|field| {
            let mut clause = serde_json::Map::new();
            clause.insert(
                format!("{}.keyword", field.as_str()),
                json!({ "order": direction.as_str() }),
            );
            Value::Object(clause)
        })
        .into_iter()
        .collect();

    let must = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => json!({
            "multi_match": {
                "query": text,
                "fields": search_fields,
            }
        }),
        None => json!({ "match_all": {} }),
    };

    json!({
        "from": offset(page, per_page),
        "size": per_page,
        "sort": sort_clause,
        "query": {
            "bool": {
                "must": [must]
            }
        }
    })
}
