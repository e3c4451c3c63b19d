use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::types::PlayRequest;

use super::{PLAYBACK_FAILED, PLAYBACK_UNAVAILABLE, PlayerState, error_response};

/// Forwards `{"uri": ...}` to the playback endpoint and relays its JSON reply.
///
/// An empty success reply is relayed as `{}`.
pub async fn play(
    Extension(state): Extension<Arc<PlayerState>>,
    Json(request): Json<PlayRequest>,
) -> Response {
    let Some(playback_url) = state.playback_url.as_deref() else {
        tracing::warn!("play requested but PLAYBACK_URL is not configured");
        return error_response(StatusCode::SERVICE_UNAVAILABLE, PLAYBACK_UNAVAILABLE);
    };

    tracing::info!(uri = %request.uri, "starting playback");

    let res = match state.http.post(playback_url).json(&request).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!(error = %e, "playback endpoint unreachable");
            return error_response(StatusCode::BAD_GATEWAY, PLAYBACK_FAILED);
        }
    };

    if !res.status().is_success() {
        tracing::warn!(status = %res.status(), "playback endpoint rejected request");
        return error_response(StatusCode::BAD_GATEWAY, PLAYBACK_FAILED);
    }

    let body = match res.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "cannot read playback endpoint reply");
            return error_response(StatusCode::BAD_GATEWAY, PLAYBACK_FAILED);
        }
    };

    // Devices may answer 204 with no content once playback has started.
    if body.iter().all(u8::is_ascii_whitespace) {
        return Json(json!({})).into_response();
    }

    match serde_json::from_slice::<Value>(&body) {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "playback endpoint returned invalid json");
            error_response(StatusCode::BAD_GATEWAY, PLAYBACK_FAILED)
        }
    }
}
