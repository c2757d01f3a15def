//! Result Projection
//!
//! Pure conversion of a parsed engine response into the display model the
//! rendering layer consumes. Total function, no failure modes.

use super::query::TYPE_FACET_FIELD;
use super::types::{DisplayModel, EngineResponse, SearchRequest};

/// Shapes the engine response for display.
///
/// Hits and the total count pass through unchanged. The facet bucket list is
/// pulled from the aggregation named "type"; an engine response without that
/// aggregation yields an empty list. The original request's fields are echoed
/// back, defaulting to empty strings when absent, so form controls can be
/// re-populated without null checks.
pub fn project(response: EngineResponse, request: &SearchRequest) -> DisplayModel {
    let buckets = response
        .aggregations
        .get(TYPE_FACET_FIELD)
        .map(|agg| agg.buckets.clone())
        .unwrap_or_default();

    DisplayModel {
        total: response.hits.total.value(),
        hits: response.hits.hits,
        aggregations: buckets,
        search_string: request.search_text.clone().unwrap_or_default(),
        search_type: request.type_filter.clone().unwrap_or_default(),
    }
}
