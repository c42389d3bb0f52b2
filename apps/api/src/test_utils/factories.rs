//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::NaiveDateTime;
use secrecy::SecretString;
use time::Duration;
use uuid::Uuid;

use crate::{
    application::{
        jwt,
        ports::billing_provider::{InvoiceInfo, SubscriptionInfo},
    },
    domain::entities::user::User,
};

/// Secret the test `AppConfig` signs and verifies sessions with.
pub const TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Create a test user with sensible defaults.
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user = User {
        id: Uuid::new_v4(),
        name: Some("Test User".to_string()),
        email: Some("test@example.com".to_string()),
        image: None,
        customer_id: None,
        price_id: None,
        has_access: false,
        created_at: Some(test_datetime()),
        updated_at: Some(test_datetime()),
    };
    overrides(&mut user);
    user
}

/// Create a test provider subscription with sensible defaults.
pub fn create_test_subscription(overrides: impl FnOnce(&mut SubscriptionInfo)) -> SubscriptionInfo {
    let mut subscription = SubscriptionInfo {
        id: format!("sub_test{}", Uuid::new_v4().simple()),
        created: test_datetime().and_utc().timestamp(),
        status: Some("active".to_string()),
        unit_amount: Some(999),
        currency: Some("usd".to_string()),
    };
    overrides(&mut subscription);
    subscription
}

/// Create a test provider invoice with sensible defaults.
pub fn create_test_invoice(overrides: impl FnOnce(&mut InvoiceInfo)) -> InvoiceInfo {
    let mut invoice = InvoiceInfo {
        id: format!("in_test{}", Uuid::new_v4().simple()),
        created: test_datetime().and_utc().timestamp(),
        status: Some("paid".to_string()),
        amount_paid: Some(999),
        amount_due: Some(999),
        currency: Some("usd".to_string()),
        hosted_invoice_url: None,
        invoice_pdf: None,
    };
    overrides(&mut invoice);
    invoice
}

/// Session token for `user`, carrying its email and name.
pub fn session_token(user: &User) -> String {
    sign(user.id, user.email.as_deref(), user.name.as_deref())
}

/// Session token for `user` whose claims carry no email.
pub fn session_token_without_email(user: &User) -> String {
    sign(user.id, None, user.name.as_deref())
}

fn sign(user_id: Uuid, email: Option<&str>, name: Option<&str>) -> String {
    let secret = SecretString::new(TEST_JWT_SECRET.into());
    jwt::issue(user_id, email, name, &secret, Duration::hours(1)).unwrap()
}

/// Returns a fixed test datetime for reproducible tests.
fn test_datetime() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_with_defaults() {
        let user = create_test_user(|_| {});
        assert_eq!(user.email.as_deref(), Some("test@example.com"));
        assert!(!user.has_access);
        assert!(user.customer_id.is_none());
    }

    #[test]
    fn test_create_user_with_overrides() {
        let user = create_test_user(|u| {
            u.has_access = true;
            u.customer_id = Some("cus_1".into());
        });
        assert!(user.has_access);
        assert_eq!(user.customer_id.as_deref(), Some("cus_1"));
    }

    #[test]
    fn test_session_token_verifies_with_test_secret() {
        let user = create_test_user(|_| {});
        let secret = SecretString::new(TEST_JWT_SECRET.into());

        let claims = jwt::verify(&session_token(&user), &secret).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email.as_deref(), Some("test@example.com"));

        let claims = jwt::verify(&session_token_without_email(&user), &secret).unwrap();
        assert!(claims.email.is_none());
    }
}
