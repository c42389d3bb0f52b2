use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User access view returned by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessUser {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub has_access: bool,
    pub customer_id: Option<String>,
    pub price_id: Option<String>,
}

/// `GET /api/admin/update-access`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub user: AccessUser,
}

/// `POST /api/admin/update-access`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessUpdateResponse {
    pub message: String,
    pub user: AccessUser,
}

/// Body of `POST /api/admin/update-access` as sent by clients.
///
/// Only the fields that are `Some` are serialized, so the server updates
/// exactly those.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessUpdateRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

/// Account block of the purchases response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    /// Name of the configured plan matching `price_id`.
    pub plan: Option<String>,
    pub price_id: Option<String>,
    pub customer_id: Option<String>,
    pub has_access: bool,
}

/// Public JSON form of a user record. The email is private and never
/// serialized here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub customer_id: Option<String>,
    pub price_id: Option<String>,
    pub has_access: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `POST /api/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataResponse {
    pub data: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    pub email: String,
}
