use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::utils;

use super::AuthState;

pub async fn login(Extension(state): Extension<Arc<AuthState>>) -> Response {
    let nonce = utils::generate_state(utils::STATE_LENGTH);
    let location = state.spotify.authorize_url(&nonce);

    tracing::info!("redirecting to spotify authorization");

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::SET_COOKIE, utils::state_cookie(&nonce)),
        ],
    )
        .into_response()
}
