//! Rust SDK for the ShipFast API.
//!
//! # Features
//!
//! - **HTTP client** - typed access to purchases, account, admin and upload endpoints
//! - **File uploader** - selection state with the upload policy checked before any request
//! - **Data grid** - single-key sorting and case-insensitive search over table rows
//! - **Sidebar** - navigation entries and account menu for the dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use shipfast_sdk::{ShipFastClient, ShipFastConfig};
//!
//! let client = ShipFastClient::new(ShipFastConfig {
//!     base_url: "https://app.example.com".to_string(),
//!     access_token: Some(token),
//!     admin_key: None,
//! })?;
//!
//! let dashboard = client.purchases().await?;
//! println!("{} compras", dashboard.purchases.len());
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
pub mod grid;
pub mod nav;
pub mod uploader;

#[cfg(feature = "client")]
pub use client::{ShipFastClient, ShipFastConfig};
pub use error::ShipFastError;
pub use grid::{CellValue, Column, DataGrid, GridRow, GridView, SortConfig, SortDirection};
pub use nav::{AccountAction, NavItem, Sidebar, SidebarUser};
pub use uploader::{FileUploader, PendingFile};

// Re-export shared types for convenience
pub use shipfast_types::{
    AccessUpdateRequest, AccessUpdateResponse, AccessUser, AccountSummary, ErrorCode, Purchase,
    PurchaseKind, PurchasesResponse, UploadPolicy, UploadResponse, UploadViolation, UploadedFile,
    UserProfile,
};
