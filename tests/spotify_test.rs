mod common;

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{basic_auth, bearer_token, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;
use coverflow::{
    config::Settings,
    spotify::{SpotifyClient, SpotifyError},
};

fn query_of(url: &str) -> HashMap<String, String> {
    let (_, query) = url.split_once('?').expect("query string");
    serde_urlencoded::from_str(query).unwrap()
}

#[test]
fn test_authorize_url_contains_flow_parameters() {
    let client = SpotifyClient::new(&settings("https://accounts.example")).unwrap();

    let url = client.authorize_url("abcdefgh12345678");

    assert!(url.starts_with("https://accounts.example/authorize?"));
    let query = query_of(&url);
    assert_eq!(query["response_type"], "code");
    assert_eq!(query["client_id"], CLIENT_ID);
    assert_eq!(query["scope"], SCOPE);
    assert_eq!(query["redirect_uri"], "http://localhost:8888/callback");
    assert_eq!(query["state"], "abcdefgh12345678");
}

#[test]
fn test_authorize_url_with_show_dialog() {
    let mut settings = settings("https://accounts.example");
    settings.show_dialog = true;
    let client = SpotifyClient::new(&settings).unwrap();

    let query = query_of(&client.authorize_url("state"));

    assert_eq!(query["show_dialog"], "true");
}

#[test]
fn test_client_requires_credentials() {
    let settings = Settings::from_lookup(|_| None).unwrap();

    assert!(SpotifyClient::new(&settings).is_err());
}

#[tokio::test]
async fn test_exchange_code_posts_form_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(basic_auth(CLIENT_ID, CLIENT_SECRET))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=the-code"))
        .and(body_string_contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access",
            "token_type": "Bearer",
            "scope": "user-read-private",
            "expires_in": 3600,
            "refresh_token": "refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SpotifyClient::new(&settings(&server.uri())).unwrap();
    let token = client.exchange_code("the-code").await.unwrap();

    assert_eq!(token.access_token, "access");
    assert_eq!(token.refresh_token.as_deref(), Some("refresh"));
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_refresh_without_rotated_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "token_type": "Bearer",
            "scope": "user-read-private",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::new(&settings(&server.uri())).unwrap();
    let token = client.refresh_access_token("refresh").await.unwrap();

    assert_eq!(token.access_token, "fresh");
    assert!(token.refresh_token.is_none());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = SpotifyClient::new(&settings(&server.uri())).unwrap();
    let err = client.exchange_code("expired").await.unwrap_err();

    match err {
        SpotifyError::Status { endpoint, status } => {
            assert_eq!(endpoint, "/api/token");
            assert_eq!(status.as_u16(), 400);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_current_user_uses_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(bearer_token("access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wizzler",
            "display_name": null,
            "images": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SpotifyClient::new(&settings(&server.uri())).unwrap();
    let profile = client.current_user("access").await.unwrap();

    assert_eq!(profile.id, "wizzler");
    assert!(profile.display_name.is_none());
    assert!(profile.images.is_empty());
}
