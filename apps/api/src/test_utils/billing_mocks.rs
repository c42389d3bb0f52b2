//! Canned billing provider for purchase history tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::billing_provider::{
        BillingProvider, CustomerId, InvoiceInfo, SubscriptionInfo,
    },
};

/// Returns a fixed history, or fails every call with the same error.
#[derive(Default)]
pub struct StubBillingProvider {
    subscriptions: Vec<SubscriptionInfo>,
    invoices: Vec<InvoiceInfo>,
    failure: Option<Failure>,
    /// Customers the provider was asked about, in call order.
    pub requested: Mutex<Vec<String>>,
}

/// `AppError` is not `Clone`; keep what is needed to rebuild it per call.
enum Failure {
    Missing(String),
    Other(String),
}

impl StubBillingProvider {
    pub fn with_history(subscriptions: Vec<SubscriptionInfo>, invoices: Vec<InvoiceInfo>) -> Self {
        Self {
            subscriptions,
            invoices,
            ..Default::default()
        }
    }

    /// Fail every call. Only `BillingResourceMissing` is reproduced as is;
    /// any other error is reported as `Billing`.
    pub fn failing(error: AppError) -> Self {
        let failure = match error {
            AppError::BillingResourceMissing(detail) => Failure::Missing(detail),
            other => Failure::Other(other.to_string()),
        };
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    fn check(&self, customer: &CustomerId) -> AppResult<()> {
        self.requested
            .lock()
            .unwrap()
            .push(customer.as_str().to_string());
        match &self.failure {
            None => Ok(()),
            Some(Failure::Missing(detail)) => Err(AppError::BillingResourceMissing(detail.clone())),
            Some(Failure::Other(detail)) => Err(AppError::Billing(detail.clone())),
        }
    }
}

#[async_trait]
impl BillingProvider for StubBillingProvider {
    async fn list_active_subscriptions(
        &self,
        customer: &CustomerId,
        limit: u32,
    ) -> AppResult<Vec<SubscriptionInfo>> {
        self.check(customer)?;
        Ok(self
            .subscriptions
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_invoices(&self, customer: &CustomerId, limit: u32) -> AppResult<Vec<InvoiceInfo>> {
        self.check(customer)?;
        Ok(self.invoices.iter().take(limit as usize).cloned().collect())
    }
}
