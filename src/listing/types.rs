//! Listing Data Types
//!
//! Response DTO for the JSON listing endpoint and the conversion from raw
//! hits to typed places.

use serde::Serialize;

use crate::backend::types::{Place, PlaceHit};

/// JSON body of the listing endpoint:
/// `{"name": "Places", "total": N, "places": [...]}`.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub name: &'static str,
    pub total: usize,
    pub places: Vec<Place>,
}

/// Converts raw hits to typed places, silently dropping any hit whose id or
/// coordinates fail to parse. Relative order of the survivors is preserved.
pub fn to_places(hits: &[PlaceHit]) -> Vec<Place> {
    hits.iter()
        .filter_map(|hit| {
            let place = hit.to_place();
            if place.is_none() {
                tracing::debug!("dropping unparseable hit '{}'", hit.id);
            }
            place
        })
        .collect()
}
