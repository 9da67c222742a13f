//! Listing Service Module
//!
//! Serves the paginated place listing, in JSON for `/api/` clients and as a
//! minimal HTML page for everything else.
//!
//! ## Overview
//! The listing never queries the backend per request. The first page request
//! triggers a single full fetch which is frozen for the life of the process;
//! every later request is a bounds-checked slice of that snapshot. Staleness
//! after ingestion-time writes is accepted by design.
//!
//! ## Submodules
//! - **`cache`**: The load-once result cache and its page-range contract.
//! - **`paginator`**: Pure page-parameter parsing and navigation math.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Response DTOs and the hit-to-place conversion.

pub mod cache;
pub mod handlers;
pub mod paginator;
pub mod types;
