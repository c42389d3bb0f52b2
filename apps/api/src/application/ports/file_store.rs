use async_trait::async_trait;

use crate::app_error::AppResult;

/// Where uploaded bytes end up.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store `bytes` under `stored_name` and return the public path it is
    /// served from.
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> AppResult<String>;
}
