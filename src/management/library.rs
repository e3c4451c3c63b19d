use std::path::{Path, PathBuf};

use crate::types::Album;

use super::StoreError;

/// Album list backing `GET /albums`.
///
/// The file is a JSON array of `{ "name", "image", "uri" }` objects and is
/// read on every call.
#[derive(Debug, Clone)]
pub struct Library {
    path: PathBuf,
}

impl Library {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Library { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn albums(&self) -> Result<Vec<Album>, StoreError> {
        let content = async_fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Serde {
            path: self.path.clone(),
            source,
        })
    }
}
