//! Configuration management for the coverflow servers.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory, or `.env` in the local data directory
//! 3. Application defaults (where applicable)

use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
    path::PathBuf,
};

use thiserror::Error;

pub const DEFAULT_AUTH_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_PLAYER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKENS_DIR: &str = "tokens";
pub const DEFAULT_LIBRARY_PATH: &str = "albums.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a valid socket address: {source}")]
    InvalidAddress {
        var: &'static str,
        #[source]
        source: AddrParseError,
    },

    #[error("{var} must be `true` or `false`, got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error("cannot read scopes file {path}: {source}")]
    ScopesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scopes file {path} is not a JSON array of strings: {source}")]
    ScopesFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads environment variables from a `.env` file.
///
/// A `.env` in the working directory wins. Otherwise the file is looked up in
/// the platform-specific local data directory under `coverflow/.env`:
/// - Linux: `~/.local/share/coverflow/.env`
/// - macOS: `~/Library/Application Support/coverflow/.env`
/// - Windows: `%LOCALAPPDATA%/coverflow/.env`
///
/// A missing `.env` file is not an error, since every setting can also come
/// from the process environment. Variables already set in the environment are
/// never overridden.
///
/// # Returns
///
/// The path of the loaded file, or `None` when no file was found.
pub fn load_env() -> Option<PathBuf> {
    if let Ok(path) = dotenv::dotenv() {
        return Some(path);
    }

    let path = data_dir().join(".env");
    dotenv::from_path(&path).ok().map(|_| path)
}

/// Returns the platform data directory used by coverflow.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("coverflow");
    path
}

/// Runtime settings shared by both servers.
#[derive(Clone)]
pub struct Settings {
    /// `SPOTIFY_CLIENT_ID`, required by the authorization server.
    pub client_id: Option<String>,
    /// `SPOTIFY_CLIENT_SECRET`, required by the authorization server. Never logged.
    pub client_secret: Option<String>,
    /// `AUTH_SERVER_ADDRESS`
    pub auth_addr: SocketAddr,
    /// `PLAYER_SERVER_ADDRESS`
    pub player_addr: SocketAddr,
    /// `SPOTIFY_REDIRECT_URI`, must match the URI registered with Spotify.
    pub redirect_uri: String,
    /// `SPOTIFY_ACCOUNTS_URL`, base of `/authorize` and `/api/token`.
    pub accounts_url: String,
    /// `SPOTIFY_API_URL`, base of the Web API (`/me`).
    pub api_url: String,
    /// Space separated scope from `SPOTIFY_SCOPE` or `SPOTIFY_SCOPES_FILE`.
    pub scope: String,
    /// `SPOTIFY_SHOW_DIALOG`
    pub show_dialog: bool,
    /// `TOKENS_DIR`, one `<user_id>.json` per authorized user.
    pub tokens_dir: PathBuf,
    /// `LIBRARY_PATH`, JSON array of albums served by `/albums`.
    pub library_path: PathBuf,
    /// `PLAYBACK_URL`, target of `/play`. Playback is disabled when unset.
    pub playback_url: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("auth_addr", &self.auth_addr)
            .field("player_addr", &self.player_addr)
            .field("redirect_uri", &self.redirect_uri)
            .field("accounts_url", &self.accounts_url)
            .field("api_url", &self.api_url)
            .field("scope", &self.scope)
            .field("show_dialog", &self.show_dialog)
            .field("tokens_dir", &self.tokens_dir)
            .field("library_path", &self.library_path)
            .field("playback_url", &self.playback_url)
            .finish()
    }
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a value cannot be parsed. Missing client
    /// credentials are reported later by [`Settings::credentials`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let auth_addr = parse_addr(
            "AUTH_SERVER_ADDRESS",
            get("AUTH_SERVER_ADDRESS").as_deref(),
            DEFAULT_AUTH_ADDRESS,
        )?;
        let player_addr = parse_addr(
            "PLAYER_SERVER_ADDRESS",
            get("PLAYER_SERVER_ADDRESS").as_deref(),
            DEFAULT_PLAYER_ADDRESS,
        )?;

        let scope = match (get("SPOTIFY_SCOPE"), get("SPOTIFY_SCOPES_FILE")) {
            (Some(scope), _) => normalize_scope(&scope),
            (None, Some(file)) => read_scopes_file(PathBuf::from(file))?,
            (None, None) => String::new(),
        };

        let show_dialog = match get("SPOTIFY_SHOW_DIALOG") {
            Some(value) => parse_bool("SPOTIFY_SHOW_DIALOG", &value)?,
            None => false,
        };

        Ok(Self {
            client_id: get("SPOTIFY_CLIENT_ID"),
            client_secret: get("SPOTIFY_CLIENT_SECRET"),
            auth_addr,
            player_addr,
            redirect_uri: get("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            accounts_url: trim_base(
                get("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string()),
            ),
            api_url: trim_base(get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())),
            scope,
            show_dialog,
            tokens_dir: PathBuf::from(
                get("TOKENS_DIR").unwrap_or_else(|| DEFAULT_TOKENS_DIR.to_string()),
            ),
            library_path: PathBuf::from(
                get("LIBRARY_PATH").unwrap_or_else(|| DEFAULT_LIBRARY_PATH.to_string()),
            ),
            playback_url: get("PLAYBACK_URL"),
        })
    }

    /// Client id and secret, both required to talk to the accounts service.
    pub fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_ID"))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))?;
        Ok((client_id, client_secret))
    }
}

fn parse_addr(
    var: &'static str,
    value: Option<&str>,
    default: &str,
) -> Result<SocketAddr, ConfigError> {
    value
        .unwrap_or(default)
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidAddress { var, source })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn normalize_scope(scope: &str) -> String {
    scope.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn read_scopes_file(path: PathBuf) -> Result<String, ConfigError> {
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(ConfigError::ScopesFile { path, source }),
    };
    let scopes: Vec<String> = match serde_json::from_str(&content) {
        Ok(scopes) => scopes,
        Err(source) => return Err(ConfigError::ScopesFormat { path, source }),
    };
    Ok(scopes.join(" "))
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
