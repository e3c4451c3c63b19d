use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::{AccessTokenResponse, RefreshParams};

use super::{AuthState, INVALID_REQUEST, INVALID_TOKEN, error_response};

/// Trades a refresh token for a new access token.
///
/// The body is `{"access_token": ...}` only, even if Spotify rotates the
/// refresh token.
pub async fn refresh_token(
    Extension(state): Extension<Arc<AuthState>>,
    Query(params): Query<RefreshParams>,
) -> Response {
    let Some(refresh_token) = params.refresh_token.filter(|t| !t.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_REQUEST);
    };

    match state.spotify.refresh_access_token(&refresh_token).await {
        Ok(token) => Json(AccessTokenResponse {
            access_token: token.access_token,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "token refresh failed");
            error_response(StatusCode::BAD_GATEWAY, INVALID_TOKEN)
        }
    }
}
