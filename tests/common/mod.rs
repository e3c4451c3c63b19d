#![allow(dead_code)]

use std::{collections::HashMap, path::Path, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use coverflow::{
    api::{AuthState, PlayerState},
    config::Settings,
    management::{Library, TokenStore},
    server,
    spotify::SpotifyClient,
};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const SCOPE: &str = "user-read-private user-read-email";

// Settings pointing both Spotify services at `provider_uri`.
pub fn settings(provider_uri: &str) -> Settings {
    let vars: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", CLIENT_SECRET.to_string()),
        ("SPOTIFY_SCOPE", SCOPE.to_string()),
        ("SPOTIFY_ACCOUNTS_URL", provider_uri.to_string()),
        ("SPOTIFY_API_URL", format!("{provider_uri}/v1")),
    ]);
    Settings::from_lookup(|key| vars.get(key).cloned()).expect("valid test settings")
}

pub fn auth_app(settings: &Settings, tokens_dir: &Path) -> Router {
    let state = AuthState {
        spotify: SpotifyClient::new(settings).expect("credentials configured"),
        store: TokenStore::new(tokens_dir),
    };
    server::auth_router(Arc::new(state))
}

pub fn player_app(library: &Path, playback_url: Option<String>) -> Router {
    let state = PlayerState {
        library: Library::new(library),
        playback_url,
        http: reqwest::Client::new(),
    };
    server::player_router(Arc::new(state))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Parses `/#a=b&c=d` into its pairs.
pub fn fragment_pairs(location: &str) -> HashMap<String, String> {
    let fragment = location.strip_prefix("/#").unwrap_or_default();
    serde_urlencoded::from_str(fragment).expect("form-urlencoded fragment")
}

pub fn files_in(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
