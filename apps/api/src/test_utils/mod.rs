//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository, billing and storage implementations for mocking adapters
//! - `TestAppStateBuilder` for exercising HTTP routes without a database

mod app_state_builder;
mod billing_mocks;
mod factories;
mod storage_mocks;
mod user_mocks;

pub use app_state_builder::*;
pub use billing_mocks::*;
pub use factories::*;
pub use storage_mocks::*;
pub use user_mocks::*;
