//! Recommendation Ranker
//!
//! Thin post-processing over the backend's nearest-neighbor query. Ordering is
//! trusted as received (ascending arc distance in kilometers); the only work
//! here is the lossy conversion from raw hits to typed places.

use crate::backend::types::Place;
use crate::backend::SearchBackend;
use crate::error::{Result, ServiceError};

/// Number of places a recommendation returns.
pub const REC_LIMIT: usize = 3;

/// Returns the `k` places closest to the coordinate, in the backend's order
/// minus any hit whose id or coordinates fail to parse.
pub async fn recommend(
    backend: &dyn SearchBackend,
    lat: f64,
    lon: f64,
    k: usize,
) -> Result<Vec<Place>> {
    let hits = backend
        .nearest(lat, lon, k)
        .await
        .map_err(ServiceError::Backend)?;

    let places: Vec<Place> = hits
        .iter()
        .filter_map(|hit| {
            let place = hit.to_place();
            if place.is_none() {
                tracing::debug!("dropping unparseable recommendation hit '{}'", hit.id);
            }
            place
        })
        .collect();

    Ok(places)
}
