//! Wire types shared between the ShipFast API and its clients.
//!
//! This crate provides:
//! - Account and access DTOs (`AccessUser`, `AccountSummary`, `UserProfile`)
//! - Purchase history entries (`Purchase`, `PurchaseKind`)
//! - Upload metadata and the upload policy enforced on both sides of the wire
//! - The JSON error body and its machine-readable codes

mod account;
mod errors;
mod purchase;
mod upload;

pub use account::{
    AccessResponse, AccessUpdateRequest, AccessUpdateResponse, AccessUser, AccountSummary,
    UpdateEmailRequest, UserDataResponse, UserProfile,
};
pub use errors::{ErrorBody, ErrorCode};
pub use purchase::{Purchase, PurchaseKind, PurchasesResponse};
pub use upload::{UploadPolicy, UploadResponse, UploadViolation, UploadedFile, format_file_size};
