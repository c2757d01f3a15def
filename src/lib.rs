//! Faceted Document Search Service Library
//!
//! This library crate defines the core modules of the search front service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture
//! The service is a stateless request/response pipeline with three stages:
//!
//! - **Query building**: Translating raw, possibly absent form input into a
//!   structured search-engine query with boolean combination, field weighting,
//!   fuzzy matching, and a faceted aggregation.
//! - **Gateway**: The single I/O boundary that sends the built query to the
//!   search engine over HTTP and parses the response.
//! - **Projection**: Shaping the raw engine response into a display-ready model
//!   that the rendering layer consumes without null checks.

pub mod search;
