use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const AUTH_PAGE: &str = include_str!("../../assets/auth.html");
const PLAYER_PAGE: &str = include_str!("../../assets/index.html");
const SCRIPTS: &str = include_str!("../../assets/scripts.js");

pub async fn auth_page() -> Html<&'static str> {
    Html(AUTH_PAGE)
}

pub async fn player_page() -> Html<&'static str> {
    Html(PLAYER_PAGE)
}

pub async fn scripts() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPTS,
    )
}
