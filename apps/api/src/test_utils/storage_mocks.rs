//! In-memory file store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{app_error::AppResult, application::ports::file_store::FileStore};

#[derive(Default)]
pub struct InMemoryFileStore {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn save(&self, stored_name: &str, bytes: &[u8]) -> AppResult<String> {
        self.files
            .lock()
            .unwrap()
            .insert(stored_name.to_string(), bytes.to_vec());
        Ok(format!("/uploads/{stored_name}"))
    }
}
