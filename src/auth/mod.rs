//! Access Control Module
//!
//! Token-based gate for the recommendation endpoint, enabled with the `--auth`
//! flag. Tokens are self-contained signed credentials: validity is a pure
//! function of the HMAC signature, the signing algorithm, and the expiry
//! claim against the current time. Nothing is stored server-side and there is
//! no revocation list; every request re-evaluates the token from scratch.
//!
//! ## Submodules
//! - **`token`**: Claims, issuance, and verification.
//! - **`handlers`**: The `/api/get_token` endpoint and the axum middleware
//!   guarding protected routes.

pub mod handlers;
pub mod token;
