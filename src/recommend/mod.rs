//! Recommendation Service Module
//!
//! Answers "what is near me": the backend returns the closest places sorted by
//! geodesic distance, and this module turns those raw hits into typed records.
//!
//! ## Responsibilities
//! - **Ranking**: Delegated entirely to the backend's geo-distance sort; the
//!   output preserves backend order and no distance is recomputed here.
//! - **Validation**: String coordinates and ids are parsed into floats and
//!   integers; a hit failing any parse is dropped, not an error.
//! - **API**: The `/api/recommend` handler with its default reference
//!   coordinate and coordinate-parameter validation.

pub mod handlers;
pub mod ranker;
pub mod types;
