use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
    domain::entities::user::{AccessUpdate, User},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<Option<User>>;
    /// `email` must already be normalized.
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Apply exactly the supplied fields; `None` when no user has `email`.
    async fn update_access_by_email(
        &self,
        email: &str,
        update: &AccessUpdate,
    ) -> AppResult<Option<User>>;
    /// Set the email and default a missing `has_access` to false.
    async fn update_email(&self, user_id: Uuid, email: &str) -> AppResult<Option<User>>;
    /// Drop the billing link: customer and price ids are nulled, access revoked.
    async fn clear_billing(&self, user_id: Uuid) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct UserUseCases {
    repo: Arc<dyn UserRepo>,
}

impl UserUseCases {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    /// Self-service email change for the signed-in user.
    #[instrument(skip(self))]
    pub async fn update_email(&self, user_id: Uuid, email: Option<&str>) -> AppResult<User> {
        let email = email.map(str::trim).unwrap_or_default();
        if email.is_empty() {
            return Err(AppError::InvalidInput("Email es requerido".into()));
        }
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Email inválido".into()));
        }

        self.repo
            .update_email(user_id, &normalize_email(email))
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
