use std::path::{Path, PathBuf};

use crate::types::UserRecord;

use super::StoreError;

/// Writes one JSON file per authorized user.
///
/// Files live at `<dir>/<user_id>.json`. A second authorization of the same
/// user overwrites the previous file. The store never reads the files back.
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TokenStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists `record` for `user_id` and returns the written path.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidUserId`] when the id could escape the directory;
    ///   nothing is written in that case
    /// - [`StoreError::Io`] when the directory or file cannot be written
    pub async fn persist(&self, user_id: &str, record: &UserRecord) -> Result<PathBuf, StoreError> {
        let path = self.path_for(user_id)?;

        async_fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let json = serde_json::to_string(record).map_err(|source| StoreError::Serde {
            path: path.clone(),
            source,
        })?;
        async_fs::write(&path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Path of the file for `user_id`, if the id is safe to use as a file name.
    pub fn path_for(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_user_id(user_id) {
            return Err(StoreError::InvalidUserId(user_id.to_string()));
        }
        Ok(self.dir.join(format!("{user_id}.json")))
    }
}

// Spotify ids are base62, but usernames of older accounts may contain other
// printable characters. Only reject what could leave the tokens directory.
fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && !user_id.starts_with('.')
        && !user_id
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}
