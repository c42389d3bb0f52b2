use chrono::NaiveDateTime;
use shipfast_types::{AccessUser, UserProfile};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    /// Stored trimmed and lower-cased; unique when present.
    pub email: Option<String>,
    pub image: Option<String>,
    pub customer_id: Option<String>,
    pub price_id: Option<String>,
    pub has_access: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Shape returned by the admin access endpoints.
    pub fn to_access_user(&self) -> AccessUser {
        AccessUser {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            has_access: self.has_access,
            customer_id: self.customer_id.clone(),
            price_id: self.price_id.clone(),
        }
    }

    /// Public profile. The email is private and never serialized here.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            name: self.name.clone(),
            image: self.image.clone(),
            customer_id: self.customer_id.clone(),
            price_id: self.price_id.clone(),
            has_access: self.has_access,
            created_at: self.created_at.map(|t| t.and_utc()),
            updated_at: self.updated_at.map(|t| t.and_utc()),
        }
    }
}

/// Partial update of the billing fields of a user. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessUpdate {
    pub has_access: Option<bool>,
    pub customer_id: Option<String>,
    pub price_id: Option<String>,
}

impl AccessUpdate {
    pub fn is_empty(&self) -> bool {
        self.has_access.is_none() && self.customer_id.is_none() && self.price_id.is_none()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(has_access) = self.has_access {
            user.has_access = has_access;
        }
        if let Some(customer_id) = &self.customer_id {
            user.customer_id = Some(customer_id.clone());
        }
        if let Some(price_id) = &self.price_id {
            user.price_id = Some(price_id.clone());
        }
    }
}
