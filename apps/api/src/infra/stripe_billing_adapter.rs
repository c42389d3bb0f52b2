use async_trait::async_trait;
use secrecy::SecretString;

use crate::{
    app_error::AppResult,
    application::ports::billing_provider::{
        BillingProvider, CustomerId, InvoiceInfo, SubscriptionInfo,
    },
    infra::stripe_client::{StripeClient, StripeInvoice, StripeSubscription},
};

const ACTIVE: &str = "active";

/// Adapter that wraps StripeClient to implement BillingProvider.
#[derive(Clone)]
pub struct StripeBillingAdapter {
    client: StripeClient,
}

impl StripeBillingAdapter {
    pub fn new(secret_key: SecretString) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: StripeClient::new(secret_key)?,
        })
    }
}

#[async_trait]
impl BillingProvider for StripeBillingAdapter {
    async fn list_active_subscriptions(
        &self,
        customer: &CustomerId,
        limit: u32,
    ) -> AppResult<Vec<SubscriptionInfo>> {
        let subscriptions = self
            .client
            .list_subscriptions(customer.as_str(), ACTIVE, limit)
            .await?;
        Ok(subscriptions.into_iter().map(subscription_info).collect())
    }

    async fn list_invoices(&self, customer: &CustomerId, limit: u32) -> AppResult<Vec<InvoiceInfo>> {
        let invoices = self.client.list_invoices(customer.as_str(), limit).await?;
        Ok(invoices.into_iter().map(invoice_info).collect())
    }
}

fn subscription_info(sub: StripeSubscription) -> SubscriptionInfo {
    let (unit_amount, currency) = sub
        .first_price()
        .map(|price| (price.unit_amount, price.currency.clone()))
        .unwrap_or_default();

    SubscriptionInfo {
        id: sub.id,
        created: sub.created,
        status: sub.status,
        unit_amount,
        currency,
    }
}

fn invoice_info(invoice: StripeInvoice) -> InvoiceInfo {
    InvoiceInfo {
        id: invoice.id,
        created: invoice.created,
        status: invoice.status,
        amount_paid: invoice.amount_paid,
        amount_due: invoice.amount_due,
        currency: invoice.currency,
        hosted_invoice_url: invoice.hosted_invoice_url,
        invoice_pdf: invoice.invoice_pdf,
    }
}
