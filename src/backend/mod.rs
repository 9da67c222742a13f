//! Search Backend Module
//!
//! The service's only gateway to the document store. Everything above this
//! module consumes two operations: a full "match all" fetch used to warm the
//! listing cache, and a geo-distance sorted nearest-neighbor query used by the
//! recommendation endpoint.
//!
//! ## Submodules
//! - **`elastic`**: Elasticsearch HTTP client (reqwest) plus the index setup
//!   operations used by the `--setup` bootstrap path.
//! - **`types`**: Raw hit types as the backend returns them (string-typed
//!   coordinates) and the validated `Place` record derived from them.

pub mod elastic;
pub mod types;

#[cfg(test)]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use types::PlaceHit;

/// Narrow query contract the core consumes from the document store.
///
/// `nearest` must return hits already sorted ascending by geodesic (arc)
/// distance in kilometers; callers trust that ordering and never re-sort.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches every document in the index.
    async fn fetch_all(&self) -> Result<Vec<PlaceHit>>;

    /// Fetches the `k` documents closest to the given coordinate.
    async fn nearest(&self, lat: f64, lon: f64, k: usize) -> Result<Vec<PlaceHit>>;
}
