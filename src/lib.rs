//! Places Service Library
//!
//! This library crate defines the modules behind the places HTTP service: a
//! paginated listing and a nearest-neighbor recommendation API over a set of
//! place records, backed by an Elasticsearch index.
//!
//! ## Architecture Modules
//! The service is composed of five loosely coupled subsystems:
//!
//! - **`backend`**: The search backend contract and its Elasticsearch client.
//!   Everything above it consumes two queries: a full match-all fetch and a
//!   geo-distance sorted nearest-neighbor lookup.
//! - **`listing`**: The load-once result cache, pure pagination math, and the
//!   JSON/HTML listing handlers.
//! - **`recommend`**: Post-processing of geo-sorted hits into typed place
//!   records, trusting the backend's distance ordering.
//! - **`auth`**: Optional token-based access control for the recommendation
//!   endpoint: stateless signed credentials, verified fresh on every request.
//! - **`ingest`**: The `--setup` bootstrap path loading the tab-separated
//!   place dataset into the index.
//!
//! `app` ties the subsystems into an axum router around a shared `AppState`;
//! `error` defines the service-wide error kinds and their HTTP mapping.

pub mod app;
pub mod auth;
pub mod backend;
pub mod error;
pub mod ingest;
pub mod listing;
pub mod recommend;
