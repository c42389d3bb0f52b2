pub mod admin_access;
pub mod purchases;
pub mod upload;
pub mod user;
