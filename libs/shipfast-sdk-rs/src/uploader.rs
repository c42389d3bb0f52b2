//! Drag-and-drop file picker state.

use shipfast_types::{UploadPolicy, UploadViolation, format_file_size};

/// A file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size())
    }
}

/// Check a batch against the policy.
pub fn validate_batch(policy: &UploadPolicy, files: &[PendingFile]) -> Result<(), UploadViolation> {
    let sizes: Vec<u64> = files.iter().map(PendingFile::size).collect();
    policy.check(&sizes)
}

/// `accept` value that lets the picker offer every file type.
pub const ACCEPT_ANY: &str = "*";

/// Selection state behind the uploader widget.
///
/// A rejected batch leaves the previous selection untouched and records the
/// error message; an accepted one replaces the selection and clears it.
#[derive(Debug)]
pub struct FileUploader {
    policy: UploadPolicy,
    accept: String,
    files: Vec<PendingFile>,
    error: Option<String>,
    dragging: bool,
}

impl Default for FileUploader {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}

impl FileUploader {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            accept: ACCEPT_ANY.to_string(),
            files: Vec::new(),
            error: None,
            dragging: false,
        }
    }

    /// File type filter handed to the native picker (`image/*,.pdf`).
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn accept(&self) -> &str {
        &self.accept
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn hint(&self) -> String {
        self.policy.hint()
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Files dropped onto the zone.
    pub fn drop_files(&mut self, files: Vec<PendingFile>) -> Option<&[PendingFile]> {
        self.dragging = false;
        self.select(files)
    }

    /// Files chosen from the picker. Returns the new selection when the
    /// batch is accepted and non-empty.
    pub fn select(&mut self, files: Vec<PendingFile>) -> Option<&[PendingFile]> {
        if let Err(violation) = validate_batch(&self.policy, &files) {
            self.error = Some(violation.to_string());
            return None;
        }

        self.error = None;
        if files.is_empty() {
            return None;
        }

        self.files = files;
        Some(&self.files)
    }

    /// Drop one file from the selection; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> &[PendingFile] {
        if index < self.files.len() {
            self.files.remove(index);
        }
        &self.files
    }
}
