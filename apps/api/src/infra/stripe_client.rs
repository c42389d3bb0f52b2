use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    app_error::{AppError, AppResult},
    infra::http_client::try_build_client,
};

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";
const RESOURCE_MISSING: &str = "resource_missing";

/// Read-only Stripe REST client for customer billing history.
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: SecretString,
}

impl StripeClient {
    pub fn new(secret_key: SecretString) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: try_build_client()?,
            secret_key,
        })
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    pub async fn list_subscriptions(
        &self,
        customer_id: &str,
        status: &str,
        limit: u32,
    ) -> AppResult<Vec<StripeSubscription>> {
        let query = [
            ("customer", customer_id.to_string()),
            ("status", status.to_string()),
            ("limit", limit.to_string()),
        ];

        let list: StripeList<StripeSubscription> = self.get("subscriptions", &query).await?;
        Ok(list.data)
    }

    // ========================================================================
    // Invoices
    // ========================================================================

    pub async fn list_invoices(&self, customer_id: &str, limit: u32) -> AppResult<Vec<StripeInvoice>> {
        let query = [
            ("customer", customer_id.to_string()),
            ("limit", limit.to_string()),
        ];

        let list: StripeList<StripeInvoice> = self.get("invoices", &query).await?;
        Ok(list.data)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .client
            .get(format!("{}/{}", STRIPE_API_BASE, path))
            .basic_auth(self.secret_key.expose_secret(), None::<&str>)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Billing(format!("Stripe request failed: {}", e)))?;

        handle_response(response).await
    }
}

async fn handle_response<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Billing(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(stripe_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse Stripe response");
        AppError::Billing(format!("Failed to parse Stripe response: {}", e))
    })
}

/// Classify a non-2xx Stripe response. Objects Stripe no longer knows are
/// reported as `BillingResourceMissing`.
fn stripe_error(status: StatusCode, body: &str) -> AppError {
    let Ok(parsed) = serde_json::from_str::<StripeErrorResponse>(body) else {
        tracing::error!(status = %status, body = %body, "Stripe API error");
        return AppError::Billing(format!("Stripe API error: {}", status));
    };

    let error = parsed.error;
    let message = error.message.unwrap_or_else(|| error.error_type.clone());

    if error.code.as_deref() == Some(RESOURCE_MISSING) {
        tracing::warn!(status = %status, message = %message, "Stripe resource missing");
        return AppError::BillingResourceMissing(message);
    }

    tracing::error!(status = %status, error_type = %error.error_type, message = %message, "Stripe API error");
    AppError::Billing(format!("Stripe error: {}", message))
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StripeList<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct StripeSubscription {
    pub id: String,
    pub created: i64,
    pub status: Option<String>,
    pub items: StripeSubscriptionItems,
}

impl StripeSubscription {
    /// Price of the first subscription item.
    pub fn first_price(&self) -> Option<&StripePrice> {
        self.items.data.first().map(|item| &item.price)
    }
}

#[derive(Debug, Deserialize)]
pub struct StripeSubscriptionItems {
    pub data: Vec<StripeSubscriptionItem>,
}

#[derive(Debug, Deserialize)]
pub struct StripeSubscriptionItem {
    pub price: StripePrice,
}

#[derive(Debug, Deserialize)]
pub struct StripePrice {
    pub id: String,
    pub unit_amount: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StripeInvoice {
    pub id: String,
    pub created: i64,
    pub status: Option<String>,
    pub amount_paid: Option<i64>,
    pub amount_due: Option<i64>,
    pub currency: Option<String>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeError,
}

#[derive(Debug, Deserialize)]
pub struct StripeError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: Option<String>,
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_missing_is_classified() {
        let body = r#"{"error":{"type":"invalid_request_error","code":"resource_missing","message":"No such customer: 'cus_x'"}}"#;

        let err = stripe_error(StatusCode::NOT_FOUND, body);

        assert!(
            matches!(err, AppError::BillingResourceMissing(ref m) if m == "No such customer: 'cus_x'")
        );
    }

    #[test]
    fn other_stripe_errors_are_billing_errors() {
        let body = r#"{"error":{"type":"api_error","message":"Something broke"}}"#;
        let err = stripe_error(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(err, AppError::Billing(ref m) if m == "Stripe error: Something broke"));

        let err = stripe_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(matches!(err, AppError::Billing(_)));
    }

    #[test]
    fn subscription_list_parses_first_price() {
        let body = r#"{
            "object": "list",
            "data": [{
                "id": "sub_1",
                "created": 1704888000,
                "status": "active",
                "items": {"data": [{"price": {"id": "price_pro", "unit_amount": 2900, "currency": "eur"}}]}
            }]
        }"#;

        let list: StripeList<StripeSubscription> = serde_json::from_str(body).unwrap();
        let price = list.data[0].first_price().unwrap();

        assert_eq!(price.id, "price_pro");
        assert_eq!(price.unit_amount, Some(2900));
        assert_eq!(price.currency.as_deref(), Some("eur"));
    }

    #[test]
    fn invoice_tolerates_missing_optional_fields() {
        let body = r#"{"data": [{"id": "in_1", "created": 1704888000}]}"#;

        let list: StripeList<StripeInvoice> = serde_json::from_str(body).unwrap();

        assert_eq!(list.data[0].id, "in_1");
        assert!(list.data[0].amount_paid.is_none());
        assert!(list.data[0].hosted_invoice_url.is_none());
    }
}
