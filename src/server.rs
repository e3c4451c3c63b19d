use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

use crate::{
    Res,
    api::{self, AuthState, PlayerState},
};

pub fn auth_router(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/", get(api::auth_page))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/refresh_token", get(api::refresh_token))
        .layer(Extension(state))
}

pub fn player_router(state: Arc<PlayerState>) -> Router {
    Router::new()
        .route("/", get(api::player_page))
        .route("/scripts.js", get(api::scripts))
        .route("/health", get(api::health))
        .route("/albums", get(api::albums))
        .route("/play", post(api::play))
        .layer(Extension(state))
}

/// Binds the listener up front so callers know the port is open before
/// pointing a browser at it.
pub async fn bind(addr: SocketAddr) -> Res<TcpListener> {
    Ok(TcpListener::bind(&addr).await?)
}

pub async fn start_auth_server(listener: TcpListener, state: Arc<AuthState>) -> Res<()> {
    serve(listener, auth_router(state)).await
}

pub async fn start_player_server(listener: TcpListener, state: Arc<PlayerState>) -> Res<()> {
    serve(listener, player_router(state)).await
}

async fn serve(listener: TcpListener, app: Router) -> Res<()> {
    tracing::info!(addr = ?listener.local_addr().ok(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
