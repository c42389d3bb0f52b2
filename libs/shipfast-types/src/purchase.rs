use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AccountSummary;

/// Origin of a purchase entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseKind {
    #[serde(rename = "Suscripción")]
    Subscription,
    #[serde(rename = "Factura")]
    Invoice,
}

impl PurchaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subscription => "Suscripción",
            Self::Invoice => "Factura",
        }
    }
}

impl std::fmt::Display for PurchaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the purchase history.
///
/// Field names on the wire are the Spanish ones the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    /// Creation day (UTC), serialized as `YYYY-MM-DD`.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Amount in major currency units.
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Upper-case ISO currency code.
    #[serde(rename = "moneda")]
    pub currency: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "tipo")]
    pub kind: PurchaseKind,
    /// Hosted invoice page or PDF.
    #[serde(rename = "enlace")]
    pub link: Option<String>,
}

/// `GET /api/purchases`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasesResponse {
    pub user: AccountSummary,
    pub purchases: Vec<Purchase>,
}
