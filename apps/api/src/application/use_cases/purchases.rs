use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use shipfast_types::{AccountSummary, Purchase, PurchaseKind, PurchasesResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::billing_provider::{
        BillingProvider, CustomerId, InvoiceInfo, SubscriptionInfo,
    },
    domain::entities::{plan::PlanCatalog, user::User},
    use_cases::user::UserRepo,
};

/// Page size for both provider listings.
pub const LIST_LIMIT: u32 = 50;

const DEFAULT_CURRENCY: &str = "USD";
const UNKNOWN_STATUS: &str = "desconocido";

/// Identity taken from the session, used when the stored user lacks a
/// name or email.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct PurchasesUseCases {
    repo: Arc<dyn UserRepo>,
    billing: Option<Arc<dyn BillingProvider>>,
    plans: PlanCatalog,
}

impl PurchasesUseCases {
    /// `billing` is `None` when no provider key is configured; the history is
    /// then always empty.
    pub fn new(
        repo: Arc<dyn UserRepo>,
        billing: Option<Arc<dyn BillingProvider>>,
        plans: PlanCatalog,
    ) -> Self {
        Self {
            repo,
            billing,
            plans,
        }
    }

    /// Account summary plus merged purchase history, newest first.
    ///
    /// A customer the provider no longer knows is unlinked from the user and
    /// reported as an empty history.
    #[instrument(skip(self), fields(user_id = %viewer.user_id))]
    pub async fn list(&self, viewer: &Viewer) -> AppResult<PurchasesResponse> {
        let mut user = self.repo.get_by_id(viewer.user_id).await?;
        let mut purchases = Vec::new();

        let customer_id = user
            .as_ref()
            .and_then(|u| u.customer_id.as_deref())
            .filter(|id| !id.is_empty())
            .map(CustomerId::new);

        if let (Some(billing), Some(customer_id)) = (&self.billing, customer_id) {
            match fetch_history(billing.as_ref(), &customer_id).await {
                Ok(history) => purchases = history,
                Err(AppError::BillingResourceMissing(detail)) => {
                    tracing::warn!(
                        customer_id = %customer_id,
                        detail = %detail,
                        "Billing customer not found, clearing stored billing fields"
                    );
                    user = self.repo.clear_billing(viewer.user_id).await?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(PurchasesResponse {
            user: self.summary(user.as_ref(), viewer),
            purchases,
        })
    }

    fn summary(&self, user: Option<&User>, viewer: &Viewer) -> AccountSummary {
        let price_id = user.and_then(|u| u.price_id.clone());
        AccountSummary {
            id: user.map(|u| u.id.to_string()),
            name: user
                .and_then(|u| u.name.clone())
                .or_else(|| viewer.name.clone())
                .unwrap_or_default(),
            email: user
                .and_then(|u| u.email.clone())
                .or_else(|| viewer.email.clone())
                .unwrap_or_default(),
            plan: self.plans.name_for(price_id.as_deref()).map(str::to_string),
            price_id,
            customer_id: user.and_then(|u| u.customer_id.clone()),
            has_access: user.is_some_and(|u| u.has_access),
        }
    }
}

async fn fetch_history(
    billing: &dyn BillingProvider,
    customer_id: &CustomerId,
) -> AppResult<Vec<Purchase>> {
    let subscriptions = billing
        .list_active_subscriptions(customer_id, LIST_LIMIT)
        .await?;
    let invoices = billing.list_invoices(customer_id, LIST_LIMIT).await?;

    let mut purchases: Vec<Purchase> = subscriptions
        .iter()
        .map(subscription_purchase)
        .chain(invoices.iter().map(invoice_purchase))
        .collect();

    // Stable: same-day entries keep subscriptions ahead of invoices.
    purchases.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(purchases)
}

fn subscription_purchase(sub: &SubscriptionInfo) -> Purchase {
    Purchase {
        id: sub.id.clone(),
        date: utc_date(sub.created),
        amount: major_units(sub.unit_amount.unwrap_or(0)),
        currency: currency_code(sub.currency.as_deref()),
        status: sub
            .status
            .clone()
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        kind: PurchaseKind::Subscription,
        link: None,
    }
}

fn invoice_purchase(invoice: &InvoiceInfo) -> Purchase {
    Purchase {
        id: invoice.id.clone(),
        date: utc_date(invoice.created),
        amount: major_units(invoice.amount_paid.or(invoice.amount_due).unwrap_or(0)),
        currency: currency_code(invoice.currency.as_deref()),
        status: invoice
            .status
            .clone()
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        kind: PurchaseKind::Invoice,
        link: invoice
            .hosted_invoice_url
            .clone()
            .or_else(|| invoice.invoice_pdf.clone()),
    }
}

fn utc_date(unix_secs: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp(unix_secs, 0)
        .unwrap_or_default()
        .date_naive()
}

fn major_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

fn currency_code(currency: Option<&str>) -> String {
    currency
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}
