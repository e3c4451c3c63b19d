//! # Spotify Integration Module
//!
//! Thin client for the two Spotify services the authorization server talks to:
//!
//! - the accounts service (`/authorize`, `/api/token`), see [`auth`]
//! - the Web API (`/me`), see [`profile`]
//!
//! Every call is a single request. There is no retry, no backoff and no
//! caching: a non-success status is handed back to the caller as
//! [`SpotifyError::Status`] and the HTTP handlers turn it into an error code.
//!
//! Base URLs come from [`Settings`], so tests can point the client at a mock
//! server.

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::config::{ConfigError, Settings};

pub mod auth;
pub mod profile;

pub(crate) const TOKEN_ENDPOINT: &str = "/api/token";
pub(crate) const ME_ENDPOINT: &str = "/me";

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
}

/// Client for the Spotify accounts service and Web API.
///
/// Holds client credentials and has no `Debug` impl.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    accounts_url: String,
    api_url: String,
    scope: String,
    show_dialog: bool,
}

impl SpotifyClient {
    /// # Errors
    ///
    /// [`ConfigError::Missing`] when the client id or secret is not configured.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(http: Client, settings: &Settings) -> Result<Self, ConfigError> {
        let (client_id, client_secret) = settings.credentials()?;
        Ok(SpotifyClient {
            http,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: settings.redirect_uri.clone(),
            accounts_url: settings.accounts_url.clone(),
            api_url: settings.api_url.clone(),
            scope: settings.scope.clone(),
            show_dialog: settings.show_dialog,
        })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

fn check_status(response: Response, endpoint: &'static str) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SpotifyError::Status { endpoint, status })
    }
}
