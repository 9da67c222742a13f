//! Application State and Router Assembly
//!
//! `AppState` owns everything the handlers share: the backend client, the
//! load-once result cache, and (when enabled) the token authority. The router
//! is built from that state so integration tests can assemble the exact
//! production app around a stub backend.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::auth::handlers::{handle_get_token, require_auth};
use crate::auth::token::TokenAuthority;
use crate::backend::SearchBackend;
use crate::listing::cache::ResultCache;
use crate::listing::handlers::dispatch;
use crate::recommend::handlers::handle_recommend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SearchBackend>,
    pub cache: Arc<ResultCache>,
    pub auth: Option<Arc<TokenAuthority>>,
}

impl AppState {
    /// Builds the shared state; the cache is an explicit object owned here
    /// and injected into handlers, not process-global.
    pub fn new(backend: Arc<dyn SearchBackend>, auth: Option<Arc<TokenAuthority>>) -> Self {
        Self {
            cache: Arc::new(ResultCache::new(backend.clone())),
            backend,
            auth,
        }
    }
}

/// Assembles the HTTP surface. `/api/recommend` is wrapped in the token
/// middleware and `/api/get_token` registered only when auth is enabled;
/// every unrouted path falls through to the listing dispatch (JSON under
/// `/api/`, HTML elsewhere), mirroring the catch-all behavior clients of the
/// original service expect.
pub fn build_router(state: AppState) -> Router {
    let app: Router<AppState> = if state.auth.is_some() {
        Router::new()
            .route("/api/recommend", get(handle_recommend))
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .route("/api/get_token", get(handle_get_token))
    } else {
        Router::new().route("/api/recommend", get(handle_recommend))
    };

    app.fallback(dispatch).with_state(state)
}
