//! Search Service Module
//!
//! The core component translating user form input into search-engine queries
//! and shaping the responses for display.
//!
//! ## Overview
//! This module bridges the HTTP API layer with the external search engine. A
//! request carries zero or more of {search text, type filter}; both absent is a
//! normal state and yields a match-all listing. Every request independently runs
//! the full pipeline; no state survives between invocations.
//!
//! ## Responsibilities
//! - **Normalization**: Collapsing the absent/empty/placeholder tri-state of raw
//!   form values into a plain `Option` at the boundary.
//! - **Query building**: Producing the engine query body with weighted fuzzy
//!   text matching, exact type filtering, and a "type" facet aggregation.
//! - **Execution**: Sending the query to a fixed index and surfacing engine
//!   failures as explicit errors.
//! - **Projection**: Producing the display model (hits, total, facet buckets,
//!   echoed input) consumed by the rendering layer.
//!
//! ## Submodules
//! - **`query`**: Pure query-body construction.
//! - **`gateway`**: The HTTP boundary to the search engine.
//! - **`projector`**: Engine response to display model conversion.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod gateway;
pub mod handlers;
pub mod projector;
pub mod query;
pub mod types;
