//! Recommendation Data Types

use serde::Serialize;

use crate::backend::types::Place;

/// JSON body of the recommendation endpoint:
/// `{"name": "Recommendation", "places": [...]}`.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub name: &'static str,
    pub places: Vec<Place>,
}
