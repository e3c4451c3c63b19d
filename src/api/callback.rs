use std::sync::Arc;

use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    types::{CallbackParams, UserRecord},
    utils,
};

use super::{AuthState, INVALID_TOKEN, STATE_MISMATCH};

pub async fn callback(
    Extension(state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Response {
    // A query that cannot be decoded (e.g. a repeated `state`) carries no
    // usable state.
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!(error = %e, "malformed callback query");
            return redirect(utils::error_fragment(STATE_MISMATCH), None);
        }
    };
    let stored_state = utils::cookie_value(&headers, utils::STATE_KEY);

    // Empty values count as missing.
    let state_matches = matches!(
        (params.state.as_deref(), stored_state.as_deref()),
        (Some(received), Some(stored)) if !received.is_empty() && received == stored
    );
    if !state_matches {
        tracing::warn!("callback state does not match the stored state");
        return redirect(utils::error_fragment(STATE_MISMATCH), None);
    }

    let location = complete_authorization(&state, &params).await;
    redirect(location, Some(utils::clear_state_cookie()))
}

// Returns the fragment redirect target. Only runs after the state check.
async fn complete_authorization(state: &AuthState, params: &CallbackParams) -> String {
    if let Some(error) = &params.error {
        tracing::warn!(%error, "authorization denied by spotify");
        return utils::error_fragment(INVALID_TOKEN);
    }
    let Some(code) = params.code.as_deref() else {
        tracing::warn!("callback without authorization code");
        return utils::error_fragment(INVALID_TOKEN);
    };

    let token = match state.spotify.exchange_code(code).await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "token exchange failed");
            return utils::error_fragment(INVALID_TOKEN);
        }
    };
    let refresh_token = token.refresh_token.clone().unwrap_or_default();

    let profile = match state.spotify.current_user(&token.access_token).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "profile request failed");
            return utils::error_fragment(INVALID_TOKEN);
        }
    };

    let scope = if token.scope.is_empty() {
        state.spotify.scope()
    } else {
        token.scope.as_str()
    };
    let record = UserRecord::new(&profile, &refresh_token, scope);

    match state.store.persist(&profile.id, &record).await {
        Ok(path) => tracing::info!(user = %profile.id, path = %path.display(), "stored token"),
        Err(e) => tracing::error!(user = %profile.id, error = %e, "failed to store token"),
    }

    utils::fragment_url(&[
        ("access_token", token.access_token.as_str()),
        ("refresh_token", refresh_token.as_str()),
    ])
}

fn redirect(location: String, cookie: Option<String>) -> Response {
    match cookie {
        Some(cookie) => (
            StatusCode::FOUND,
            [(header::LOCATION, location), (header::SET_COOKIE, cookie)],
        )
            .into_response(),
        None => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
    }
}
