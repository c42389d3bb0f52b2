use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::file_store::FileStore,
};

/// Writes uploads under a directory served statically at `public_prefix`.
pub struct LocalFileStore {
    dir: PathBuf,
    public_prefix: String,
}

impl LocalFileStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> AppResult<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::Internal(format!("create upload dir: {e}")))?;

        let target = self.dir.join(stored_name);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("write {}: {e}", target.display())))?;

        tracing::debug!(path = %target.display(), size = bytes.len(), "Upload written");
        Ok(format!("{}/{}", self.public_prefix, stored_name))
    }
}
