use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{LIBRARY_UNAVAILABLE, PlayerState, error_response};

pub async fn albums(Extension(state): Extension<Arc<PlayerState>>) -> Response {
    match state.library.albums().await {
        Ok(albums) => {
            tracing::debug!(count = albums.len(), "serving album library");
            Json(albums).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "cannot load album library");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LIBRARY_UNAVAILABLE)
        }
    }
}
