use std::{net::SocketAddr, sync::Arc};

use crate::{
    api::AuthState,
    config::Settings,
    error, info,
    management::TokenStore,
    server::{bind, start_auth_server},
    spotify::SpotifyClient,
    success, warning,
};

/// Runs the authorization server until it is stopped.
///
/// # Arguments
///
/// * `settings` - Loaded settings; `auth_addr` decides where to listen
/// * `open` - Open the login page in the default browser once listening
///
/// # Flow
///
/// 1. **Bind**: Opens the listener on `auth_addr`
/// 2. **Browser**: Optionally opens the login page on the redirect URI's origin
/// 3. **Serve**: Handles `/login`, `/callback` and `/refresh_token` until
///    the process is stopped
///
/// Bind and serve failures terminate the program with an error message.
pub async fn auth(settings: Settings, open: bool) {
    let spotify = match SpotifyClient::new(&settings) {
        Ok(spotify) => spotify,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    let state = Arc::new(AuthState {
        spotify,
        store: TokenStore::new(&settings.tokens_dir),
    });

    let listener = match bind(settings.auth_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot listen on {}: {}", settings.auth_addr, e),
    };

    let login_page = login_url(&settings);
    success!("Authorization server listening on {}", base_url(settings.auth_addr));
    info!("Redirect URI: {}", settings.redirect_uri);
    info!("Tokens are written to {}", state.store.dir().display());
    if settings.scope.is_empty() {
        warning!("No scope configured, Spotify will only grant public access");
    }

    if open {
        if webbrowser::open(&login_page).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                login_page
            )
        }
    } else {
        info!("Log in at {}", login_page);
    }

    if let Err(e) = start_auth_server(listener, state).await {
        error!("Authorization server stopped: {}", e);
    }
}

// The state cookie is bound to the host, so the login page must be opened on
// the same origin Spotify redirects back to.
fn login_url(settings: &Settings) -> String {
    match settings.redirect_uri.strip_suffix("/callback") {
        Some(origin) => format!("{origin}/login"),
        None => format!("{}/login", base_url(settings.auth_addr)),
    }
}

/// `http://host:port` for a bind address, using `localhost` for wildcard binds.
pub(crate) fn base_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_uses_localhost_for_wildcard_addresses() {
        let addr: SocketAddr = "0.0.0.0:8888".parse().unwrap();
        assert_eq!(base_url(addr), "http://localhost:8888");
    }

    #[test]
    fn login_url_follows_redirect_uri_origin() {
        let mut settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(login_url(&settings), "http://localhost:8888/login");

        settings.redirect_uri = "https://example.com/spotify/oauth".to_string();
        assert_eq!(login_url(&settings), "http://127.0.0.1:8888/login");
    }

    #[test]
    fn base_url_keeps_concrete_addresses() {
        let addr: SocketAddr = "127.0.0.1:8888".parse().unwrap();
        assert_eq!(base_url(addr), "http://127.0.0.1:8888");

        let addr: SocketAddr = "[::1]:5000".parse().unwrap();
        assert_eq!(base_url(addr), "http://[::1]:5000");
    }
}
