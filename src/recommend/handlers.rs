//! Recommendation HTTP Handler
//!
//! Parses the optional `lat`/`lon` query parameters (falling back to a fixed
//! reference coordinate) and serves the ranked places. When access control is
//! enabled the route is wrapped in the auth middleware before reaching here.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use super::ranker::{recommend, REC_LIMIT};
use super::types::RecommendResponse;
use crate::app::AppState;
use crate::error::{Result, ServiceError};

/// Reference coordinate used when the client supplies none.
pub const DEFAULT_LAT: f64 = 55.797129;
pub const DEFAULT_LON: f64 = 37.579789;

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

pub async fn handle_recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>> {
    let lat = parse_coordinate(params.lat.as_deref(), DEFAULT_LAT, "lat")?;
    let lon = parse_coordinate(params.lon.as_deref(), DEFAULT_LON, "lon")?;

    let places = recommend(state.backend.as_ref(), lat, lon, REC_LIMIT).await?;

    Ok(Json(RecommendResponse {
        name: "Recommendation",
        places,
    }))
}

/// Absent or empty means the default; a supplied value must parse as a float.
pub fn parse_coordinate(
    raw: Option<&str>,
    default: f64,
    param: &'static str,
) -> Result<f64> {
    match raw {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| ServiceError::InvalidCoordinate(param)),
    }
}
