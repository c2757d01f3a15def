//! Search Data Types
//!
//! Defines the Data Transfer Objects (DTOs) used along the search pipeline:
//! raw form input, the normalized request, the parsed engine response, and the
//! display model handed to the rendering layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Form layers that serialize an unset control ship the literal string
/// "undefined" instead of omitting the field.
const PLACEHOLDER_UNSET: &str = "undefined";

/// Raw request parameters as they arrive from the query string or form body.
///
/// Values here are untrusted: a field may be missing, empty, or carry the
/// placeholder value. Nothing downstream of [`SearchRequest::from_raw`] ever
/// sees these.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

/// Normalized search input: each field is either meaningfully present or fully
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_text: Option<String>,
    pub type_filter: Option<String>,
}

impl SearchRequest {
    /// Collapses the absent/empty/placeholder tri-state of raw form values.
    ///
    /// This is the only place that decides whether a field "is set"; the pure
    /// pipeline stages downstream just match on `Option`.
    pub fn from_raw(params: RawSearchParams) -> Self {
        Self {
            search_text: normalize(params.search),
            type_filter: normalize(params.doc_type),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v.as_str() != PLACEHOLDER_UNSET)
}

/// Parsed search-engine response for a single request.
///
/// Hit documents are kept as raw JSON and passed through to the display model
/// unmodified. Owned transiently per request, never cached.
#[derive(Debug, Deserialize)]
pub struct EngineResponse {
    pub hits: EngineHits,
    #[serde(default)]
    pub aggregations: HashMap<String, TermsAggregation>,
}

/// The `hits` envelope of the engine response.
#[derive(Debug, Deserialize)]
pub struct EngineHits {
    pub total: HitTotal,
    pub hits: Vec<Value>,
}

/// Total hit count on the wire.
///
/// Older engines report a bare integer, current ones wrap it as
/// `{"value": N, "relation": "eq"}`. Both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HitTotal {
    Plain(u64),
    Keyed { value: u64 },
}

impl HitTotal {
    pub fn value(&self) -> u64 {
        match self {
            HitTotal::Plain(n) => *n,
            HitTotal::Keyed { value } => *value,
        }
    }
}

/// A single terms aggregation as returned by the engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsAggregation {
    pub buckets: Vec<FacetBucket>,
}

/// One facet bucket: a field value and the number of matching documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub key: String,
    pub doc_count: u64,
}

/// The display-ready result handed to the rendering layer.
///
/// The echoed `search_string` / `search_type` fields let the presentation layer
/// re-populate form controls; they are empty strings when the corresponding
/// input was absent, never a placeholder.
#[derive(Debug, Serialize)]
pub struct DisplayModel {
    pub hits: Vec<Value>,
    pub total: u64,
    pub aggregations: Vec<FacetBucket>,
    pub search_string: String,
    pub search_type: String,
}
