//! Service Error Types
//!
//! Defines the error kinds the HTTP boundary can produce and how each maps to a
//! status code. Client-side mistakes (bad page, bad coordinates, bad token) are
//! translated into 4xx responses with a short message; backend failures are
//! logged and surfaced as a bare 500 so internal details never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Page parameter was negative, non-numeric, or out of the dataset's range.
    #[error("Invalid page value: '{0}'")]
    InvalidPage(String),

    /// A supplied `lat`/`lon` query parameter failed to parse as a float.
    #[error("Invalid '{0}' parameter")]
    InvalidCoordinate(&'static str),

    /// Missing, malformed, tampered, or expired access token.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// The search backend was unreachable or returned an unusable response.
    #[error("search backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            err @ (ServiceError::InvalidPage(_) | ServiceError::InvalidCoordinate(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            err @ ServiceError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, err.to_string()).into_response()
            }
            ServiceError::Backend(err) => {
                tracing::error!("backend failure: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
