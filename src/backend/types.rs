//! Backend Data Types
//!
//! Raw hit structures as Elasticsearch returns them, and the validated place
//! record the HTTP layer serves. Coordinates and document ids arrive as strings
//! in `_source`/`_id`; the typed `Place` is produced by a parse step that drops
//! any hit failing to parse rather than failing the whole response.

use serde::{Deserialize, Serialize};

/// A raw search hit: opaque id, relevance score, and the stored fields.
///
/// `score` is `None` for geo-sorted queries, where Elasticsearch reports
/// `"_score": null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub fields: PlaceFields,
}

/// The stored field set of a place document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceFields {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub location: RawGeoPoint,
}

/// Coordinates exactly as stored in the index: strings, not floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGeoPoint {
    pub lat: String,
    pub lon: String,
}

/// A validated place record with typed id and coordinates.
///
/// This is the shape served by both the listing and recommendation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl PlaceHit {
    /// Parses the string-typed id and coordinates into a typed [`Place`].
    ///
    /// Returns `None` when any of the three parses fails; callers drop such
    /// hits from their result rather than erroring, favoring availability
    /// over completeness.
    pub fn to_place(&self) -> Option<Place> {
        let id = self.id.parse::<i64>().ok()?;
        let lat = self.fields.location.lat.parse::<f64>().ok()?;
        let lon = self.fields.location.lon.parse::<f64>().ok()?;

        Some(Place {
            id,
            name: self.fields.name.clone(),
            address: self.fields.address.clone(),
            phone: self.fields.phone.clone(),
            location: GeoLocation { lat, lon },
        })
    }
}

/// Envelope of an Elasticsearch `_search` response, reduced to what we read.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub hits: HitsSection,
}

#[derive(Debug, Deserialize)]
pub struct HitsSection {
    pub hits: Vec<PlaceHit>,
}
