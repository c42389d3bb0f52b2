use shipfast_types::{ErrorCode, UploadViolation};
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum ShipFastError {
    /// The batch broke the upload policy; nothing was sent.
    #[error("{0}")]
    Upload(#[from] UploadViolation),

    /// `upload_files` was called with an empty batch.
    #[error("No hay archivos para subir")]
    NothingToUpload,

    /// API returned an error
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
