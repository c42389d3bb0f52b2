use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use shipfast_types::{UploadPolicy, UploadedFile};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{ports::file_store::FileStore, validators::sanitize_file_name},
};

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 6;

/// One file part read from the request.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Clone)]
pub struct UploadUseCases {
    store: Arc<dyn FileStore>,
    policy: UploadPolicy,
}

impl UploadUseCases {
    pub fn new(store: Arc<dyn FileStore>, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    /// Store a batch and describe what was written. Nothing is written when
    /// the batch breaks the policy.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn upload(
        &self,
        uploaded_by: Option<&str>,
        files: Vec<IncomingFile>,
    ) -> AppResult<Vec<UploadedFile>> {
        if files.is_empty() {
            return Err(AppError::InvalidInput("No se encontraron archivos".into()));
        }

        let sizes: Vec<u64> = files.iter().map(IncomingFile::size).collect();
        self.policy
            .check(&sizes)
            .map_err(|violation| AppError::InvalidInput(violation.to_string()))?;

        let mut uploaded = Vec::with_capacity(files.len());
        for file in files {
            let stored_name = stored_file_name(&file.name);
            let path = self.store.save(&stored_name, &file.bytes).await?;

            uploaded.push(UploadedFile {
                size: file.size(),
                name: file.name,
                content_type: file.content_type,
                path,
                uploaded_by: uploaded_by.map(str::to_string),
                uploaded_at: Utc::now(),
            });
        }

        tracing::info!(count = uploaded.len(), "Files stored");
        Ok(uploaded)
    }
}

/// `<unix-millis>-<random>-<sanitized name>`
pub fn stored_file_name(original: &str) -> String {
    format!(
        "{}-{}-{}",
        Utc::now().timestamp_millis(),
        random_suffix(),
        sanitize_file_name(original)
    )
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
