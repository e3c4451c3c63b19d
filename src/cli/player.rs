use std::sync::Arc;

use reqwest::Client;

use crate::{
    api::PlayerState,
    config::Settings,
    error, info,
    management::Library,
    server::{bind, start_player_server},
    success, warning,
};

use super::auth::base_url;

/// Runs the player backend until it is stopped.
pub async fn player(settings: Settings) {
    let state = Arc::new(PlayerState {
        library: Library::new(&settings.library_path),
        playback_url: settings.playback_url.clone(),
        http: Client::new(),
    });

    if !state.library.path().is_file() {
        warning!(
            "Album library {} not found, /albums will fail until it exists",
            state.library.path().display()
        );
    }
    match &state.playback_url {
        Some(url) => info!("Play requests are forwarded to {}", url),
        None => warning!("PLAYBACK_URL is not set, /play is disabled"),
    }

    let listener = match bind(settings.player_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot listen on {}: {}", settings.player_addr, e),
    };
    success!("Player listening on {}", base_url(settings.player_addr));

    if let Err(e) = start_player_server(listener, state).await {
        error!("Player stopped: {}", e);
    }
}
