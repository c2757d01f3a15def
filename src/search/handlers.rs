//! Search HTTP Handlers
//!
//! Axum handlers for the single list-and-filter endpoint. GET (query string)
//! and POST (form body) carry the same two optional parameters and are handled
//! identically.
//!
//! An engine failure never leaves the request hanging: it maps to a 502 with a
//! JSON error body and is logged.

use super::gateway::SearchGateway;
use super::projector;
use super::query;
use super::types::{DisplayModel, RawSearchParams, SearchRequest};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use serde::Serialize;
use std::sync::Arc;

/// Error body returned when the search engine call fails.
#[derive(Debug, Serialize)]
pub struct SearchErrorBody {
    pub error: String,
}

pub async fn handle_search_get(
    Extension(gateway): Extension<Arc<SearchGateway>>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<DisplayModel>, (StatusCode, Json<SearchErrorBody>)> {
    do_search(gateway, params).await
}

pub async fn handle_search_post(
    Extension(gateway): Extension<Arc<SearchGateway>>,
    Form(params): Form<RawSearchParams>,
) -> Result<Json<DisplayModel>, (StatusCode, Json<SearchErrorBody>)> {
    do_search(gateway, params).await
}

async fn do_search(
    gateway: Arc<SearchGateway>,
    params: RawSearchParams,
) -> Result<Json<DisplayModel>, (StatusCode, Json<SearchErrorBody>)> {
    let request = SearchRequest::from_raw(params);
    let body = query::build(&request);

    match gateway.execute(&body).await {
        Ok(response) => Ok(Json(projector::project(response, &request))),
        Err(err) => {
            tracing::error!("Search request failed: {}", err);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(SearchErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
