pub mod billing_provider;
pub mod file_store;
