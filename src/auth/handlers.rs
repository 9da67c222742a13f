//! Auth HTTP Layer
//!
//! The token issuance endpoint and the middleware that gates protected routes.
//! Both are registered only when the service runs with `--auth`.

use anyhow::anyhow;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{Json, Response};
use serde::Serialize;

use crate::app::AppState;
use crate::error::{Result, ServiceError};

/// Subject all issued tokens are bound to. The service has no user accounts;
/// the token proves possession, not identity.
pub const TOKEN_SUBJECT: &str = "username";

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn handle_get_token(State(state): State<AppState>) -> Result<Json<TokenResponse>> {
    let auth = state
        .auth
        .as_ref()
        .ok_or_else(|| ServiceError::Backend(anyhow!("token endpoint wired without an authority")))?;

    let token = auth.issue(TOKEN_SUBJECT)?;
    Ok(Json(TokenResponse { token }))
}

/// Middleware verifying the `Authorization: Bearer <token>` header and making
/// the decoded claims available to the downstream handler for the duration of
/// this request only.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    // The layer is only attached when auth is enabled; if the route was
    // somehow wired without an authority, the gate fails closed.
    let Some(auth) = state.auth.as_ref() else {
        return Err(ServiceError::Unauthorized("Invalid token"));
    };

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let claims = auth.verify(header)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
