use async_trait::async_trait;

use crate::app_error::AppResult;

/// Unique identifier for a customer in the billing provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subscription as listed by the provider. Amounts are in minor units.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionInfo {
    pub id: String,
    /// Unix seconds.
    pub created: i64,
    pub status: Option<String>,
    /// Unit amount of the first subscription item's price.
    pub unit_amount: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceInfo {
    pub id: String,
    /// Unix seconds.
    pub created: i64,
    pub status: Option<String>,
    pub amount_paid: Option<i64>,
    pub amount_due: Option<i64>,
    pub currency: Option<String>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
}

/// Read access to a customer's billing history.
///
/// Implementations return `AppError::BillingResourceMissing` when the
/// provider no longer knows the customer.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    async fn list_active_subscriptions(
        &self,
        customer: &CustomerId,
        limit: u32,
    ) -> AppResult<Vec<SubscriptionInfo>>;

    async fn list_invoices(&self, customer: &CustomerId, limit: u32) -> AppResult<Vec<InvoiceInfo>>;
}
