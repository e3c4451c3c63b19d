use axum::{http::Uri, response::Json};
use serde_json::{Value, json};

/// Liveness probe mounted on both servers.
pub async fn health(uri: Uri) -> Json<Value> {
    tracing::debug!(path = %uri.path(), "health check");

    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
