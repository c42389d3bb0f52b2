//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use shipfast_types::UploadPolicy;

use crate::{
    adapters::http::app_state::AppState,
    application::ports::billing_provider::BillingProvider,
    domain::entities::{
        plan::{Plan, PlanCatalog},
        user::User,
    },
    infra::config::AppConfig,
    test_utils::{InMemoryFileStore, InMemoryUserRepo, StubBillingProvider, TEST_JWT_SECRET},
    use_cases::{
        admin_access::AdminAccessUseCases,
        purchases::PurchasesUseCases,
        upload::UploadUseCases,
        user::{UserRepo, UserUseCases},
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_user(|u| u.customer_id = Some("cus_1".into()));
///
/// let (app_state, user_repo, _store) = TestAppStateBuilder::new()
///     .with_user(user)
///     .with_admin_secret("admin-key")
///     .build_with_mocks();
/// ```
pub struct TestAppStateBuilder {
    users: Vec<User>,
    user_repo: Option<Arc<dyn UserRepo>>,
    billing: Option<Arc<dyn BillingProvider>>,
    admin_secret: Option<String>,
    upload_policy: UploadPolicy,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            user_repo: None,
            billing: None,
            admin_secret: None,
            upload_policy: UploadPolicy::default(),
        }
    }

    /// Add a user to the in-memory repository.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Replace the in-memory repository (e.g. with `FailingUserRepo`).
    pub fn with_user_repo(mut self, repo: Arc<dyn UserRepo>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Billing provider behind the purchases endpoint. Defaults to a stub with
    /// an empty history.
    pub fn with_billing(mut self, billing: Arc<dyn BillingProvider>) -> Self {
        self.billing = Some(billing);
        self
    }

    /// Configure the shared admin key.
    pub fn with_admin_secret(mut self, secret: &str) -> Self {
        self.admin_secret = Some(secret.to_string());
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        self.build_with_mocks().0
    }

    /// Returns (AppState, Arc<InMemoryUserRepo>, Arc<InMemoryFileStore>) for test
    /// assertions. The returned repo is unused when `with_user_repo` replaced it.
    pub fn build_with_mocks(self) -> (AppState, Arc<InMemoryUserRepo>, Arc<InMemoryFileStore>) {
        let in_memory_repo = Arc::new(InMemoryUserRepo::with_users(self.users));
        let file_store = Arc::new(InMemoryFileStore::new());

        let user_repo: Arc<dyn UserRepo> = self
            .user_repo
            .unwrap_or_else(|| in_memory_repo.clone() as Arc<dyn UserRepo>);
        let billing: Arc<dyn BillingProvider> = self
            .billing
            .unwrap_or_else(|| Arc::new(StubBillingProvider::default()));

        let plans = test_plans();

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            jwt_secret: SecretString::new(TEST_JWT_SECRET.into()),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            database_url: String::new(),
            admin_secret: self.admin_secret.map(|s| SecretString::new(s.into())),
            stripe_secret_key: None,
            plans: plans.clone(),
            upload_dir: std::env::temp_dir().join("shipfast-test-uploads"),
            upload_public_prefix: "/uploads".to_string(),
            upload_policy: self.upload_policy,
        });

        let app_state = AppState {
            config,
            user_use_cases: Arc::new(UserUseCases::new(user_repo.clone())),
            admin_access_use_cases: Arc::new(AdminAccessUseCases::new(user_repo.clone())),
            purchases_use_cases: Arc::new(PurchasesUseCases::new(user_repo, Some(billing), plans)),
            upload_use_cases: Arc::new(UploadUseCases::new(
                file_store.clone(),
                self.upload_policy,
            )),
        };

        (app_state, in_memory_repo, file_store)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn test_plans() -> PlanCatalog {
    PlanCatalog::new(vec![
        Plan {
            price_id: "price_basic".to_string(),
            name: "Basic".to_string(),
        },
        Plan {
            price_id: "price_pro".to_string(),
            name: "Pro".to_string(),
        },
    ])
}
