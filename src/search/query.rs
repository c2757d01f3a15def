//! Query Building
//!
//! Pure construction of the engine query body from a normalized request.
//! No I/O, no failure modes; independently testable by asserting on the
//! emitted JSON shape.

use super::types::SearchRequest;
use serde_json::{Value, json};

/// Fixed cap on returned hits; there is no pagination.
pub const RESULT_LIMIT: usize = 100;

/// Document field the facet aggregation buckets over.
pub const TYPE_FACET_FIELD: &str = "type";

/// Builds the query body for a request.
///
/// The body always carries the size cap and the "type" terms aggregation.
/// Present search text adds a `must` clause: a fuzzy multi-match over the
/// title (boosted 2x) and summary fields, scoring relevance. A present type
/// filter adds an unscored `filter` clause requiring exact term equality.
/// With neither input the body has no `query` key at all, which the engine
/// treats as match-all; the missing key is deliberate so the no-filter state
/// stays distinguishable from an explicit match-all.
pub fn build(request: &SearchRequest) -> Value {
    let mut body = json!({
        "size": RESULT_LIMIT,
        "aggs": {
            "type": {
                "terms": {
                    "field": TYPE_FACET_FIELD
                }
            }
        }
    });

    let mut bool_query = serde_json::Map::new();

    if let Some(text) = &request.search_text {
        bool_query.insert(
            "must".to_string(),
            json!({
                "multi_match": {
                    "fields": ["title^2", "summary"],
                    "query": text,
                    "fuzziness": "auto"
                }
            }),
        );
    }

    if let Some(type_filter) = &request.type_filter {
        bool_query.insert(
            "filter".to_string(),
            json!([
                {
                    "term": {
                        "type": type_filter
                    }
                }
            ]),
        );
    }

    if !bool_query.is_empty() {
        body["query"] = json!({ "bool": bool_query });
    }

    body
}
