use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Metadata for a file stored by `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Original file name as sent by the client.
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    /// Public path the file is served from (e.g. `/uploads/1700000000000-k3j9x2-report.pdf`).
    pub path: String,
    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub files: Vec<UploadedFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Why a batch of files was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadViolation {
    #[error("Máximo {max_files} archivos permitidos")]
    TooManyFiles { max_files: usize },

    #[error("Algunos archivos exceden el tamaño máximo de {max_size_mb}MB")]
    FileTooLarge { max_size_mb: u64 },
}

/// Limits applied to a batch of files before it is accepted.
///
/// The same policy runs in the client (before any request is made) and in
/// the API (before anything is written to disk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_size_mb: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: 10,
            max_size_mb: 10,
        }
    }
}

impl UploadPolicy {
    pub fn new(max_files: usize, max_size_mb: u64) -> Self {
        Self {
            max_files,
            max_size_mb,
        }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Check a batch given the size of each file in bytes.
    ///
    /// The count is checked before the sizes, so an oversized batch of
    /// oversized files reports `TooManyFiles`.
    pub fn check(&self, sizes: &[u64]) -> Result<(), UploadViolation> {
        if sizes.len() > self.max_files {
            return Err(UploadViolation::TooManyFiles {
                max_files: self.max_files,
            });
        }

        let limit = self.max_size_bytes();
        if sizes.iter().any(|size| *size > limit) {
            return Err(UploadViolation::FileTooLarge {
                max_size_mb: self.max_size_mb,
            });
        }

        Ok(())
    }

    /// Hint shown under the drop zone.
    pub fn hint(&self) -> String {
        format!(
            "Hasta {} archivos (máx. {}MB cada uno)",
            self.max_files, self.max_size_mb
        )
    }
}

/// Human-readable size with two decimals at most (`1.5 KB`, `10 MB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut scale = 1_u64;
    while exponent < UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        exponent += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_ten_files_of_ten_mb() {
        let policy = UploadPolicy::default();
        let sizes = vec![10 * BYTES_PER_MB; 10];
        assert_eq!(policy.check(&sizes), Ok(()));
    }

    #[test]
    fn too_many_files_is_rejected() {
        let policy = UploadPolicy::new(2, 10);
        let err = policy.check(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, UploadViolation::TooManyFiles { max_files: 2 });
        assert_eq!(err.to_string(), "Máximo 2 archivos permitidos");
    }

    #[test]
    fn single_oversized_file_rejects_batch() {
        let policy = UploadPolicy::new(5, 1);
        let err = policy.check(&[10, BYTES_PER_MB + 1]).unwrap_err();
        assert_eq!(err, UploadViolation::FileTooLarge { max_size_mb: 1 });
        assert_eq!(
            err.to_string(),
            "Algunos archivos exceden el tamaño máximo de 1MB"
        );
    }

    #[test]
    fn file_exactly_at_limit_is_accepted() {
        let policy = UploadPolicy::new(1, 1);
        assert!(policy.check(&[BYTES_PER_MB]).is_ok());
    }

    #[test]
    fn count_is_checked_before_size() {
        let policy = UploadPolicy::new(1, 1);
        let err = policy.check(&[BYTES_PER_MB * 5, BYTES_PER_MB * 5]).unwrap_err();
        assert!(matches!(err, UploadViolation::TooManyFiles { .. }));
    }

    #[test]
    fn hint_mentions_limits() {
        assert_eq!(
            UploadPolicy::default().hint(),
            "Hasta 10 archivos (máx. 10MB cada uno)"
        );
    }

    #[test]
    fn file_sizes_are_humanized() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * BYTES_PER_MB), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * BYTES_PER_MB), "3 GB");
    }
}
