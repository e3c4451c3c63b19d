use std::path::PathBuf;

use thiserror::Error;

mod library;
mod tokens;

pub use library::Library;
pub use tokens::TokenStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to store token for user id {0:?}")]
    InvalidUserId(String),
}
