use axum::http::{HeaderMap, header::COOKIE};
use rand::{Rng, distr::Alphanumeric};

/// Name of the cookie carrying the OAuth `state` between `/login` and `/callback`.
pub const STATE_KEY: &str = "spotify_auth_state";

pub const STATE_LENGTH: usize = 16;

/// Generates a random alphanumeric string of `length` characters.
pub fn generate_state(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Finds the value of cookie `name` across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}

/// `Set-Cookie` value storing the OAuth state.
pub fn state_cookie(state: &str) -> String {
    format!("{STATE_KEY}={state}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value removing the OAuth state.
pub fn clear_state_cookie() -> String {
    format!("{STATE_KEY}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Builds `/#key=value&...` with form-urlencoded pairs.
pub fn fragment_url(pairs: &[(&str, &str)]) -> String {
    format!("/#{}", serde_urlencoded::to_string(pairs).unwrap_or_default())
}

/// Fragment redirect target for an error code such as `state_mismatch`.
pub fn error_fragment(code: &str) -> String {
    fragment_url(&[("error", code)])
}
