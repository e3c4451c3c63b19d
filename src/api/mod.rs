//! # API Module
//!
//! HTTP handlers for the two coverflow servers.
//!
//! ## Authorization server
//!
//! - [`login`] - Stores a fresh `state` nonce in a cookie and redirects to the
//!   Spotify authorization page.
//! - [`callback`] - Checks the `state` against the cookie, exchanges the code,
//!   fetches the profile, writes `<tokens_dir>/<user_id>.json` and redirects
//!   with the tokens in the URL fragment.
//! - [`refresh_token`] - Trades a refresh token for a new access token.
//! - [`auth_page`] - Landing page that displays the fragment values.
//!
//! ## Player backend
//!
//! - [`player_page`] and [`scripts`] - The coverflow page and its script.
//! - [`albums`] - The album library as JSON.
//! - [`play`] - Forwards a play request to the playback endpoint.
//!
//! ## Monitoring
//!
//! - [`health`] - Status and version, mounted on both servers.
//!
//! Errors are never retried. The authorization flow reports them as
//! `#error=<code>` redirects, the JSON endpoints as `{"error": <code>}` bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{management::Library, management::TokenStore, spotify::SpotifyClient};

mod albums;
mod callback;
mod health;
mod login;
mod pages;
mod play;
mod refresh;

pub use albums::albums;
pub use callback::callback;
pub use health::health;
pub use login::login;
pub use pages::{auth_page, player_page, scripts};
pub use play::play;
pub use refresh::refresh_token;

pub const STATE_MISMATCH: &str = "state_mismatch";
pub const INVALID_TOKEN: &str = "invalid_token";
pub const INVALID_REQUEST: &str = "invalid_request";
pub const PLAYBACK_UNAVAILABLE: &str = "playback_unavailable";
pub const PLAYBACK_FAILED: &str = "playback_failed";
pub const LIBRARY_UNAVAILABLE: &str = "library_unavailable";

/// Shared state of the authorization server.
#[derive(Clone)]
pub struct AuthState {
    pub spotify: SpotifyClient,
    pub store: TokenStore,
}

/// Shared state of the player backend.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub library: Library,
    pub playback_url: Option<String>,
    pub http: reqwest::Client,
}

fn error_response(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}
