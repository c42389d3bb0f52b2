use std::sync::Arc;

use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_customer_id, is_valid_price_id, normalize_email},
    domain::entities::user::{AccessUpdate, User},
    use_cases::user::UserRepo,
};

const EMAIL_REQUIRED: &str = "Email es requerido";
const EMPTY_UPDATE: &str = "Debe enviar al menos uno de: hasAccess, customerId, priceId";

/// Manual access management for operators.
#[derive(Clone)]
pub struct AdminAccessUseCases {
    repo: Arc<dyn UserRepo>,
}

impl AdminAccessUseCases {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_access(&self, email: Option<&str>) -> AppResult<User> {
        let email = required_email(email)?;
        self.repo
            .get_by_email(&email)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    #[instrument(skip(self))]
    pub async fn update_access(&self, email: Option<&str>, update: AccessUpdate) -> AppResult<User> {
        let email = required_email(email)?;

        if update.is_empty() {
            return Err(AppError::InvalidInput(EMPTY_UPDATE.into()));
        }
        if update
            .customer_id
            .as_deref()
            .is_some_and(|id| !is_valid_customer_id(id))
        {
            return Err(AppError::InvalidInput(
                "customerId inválido: debe contener \"cus_\"".into(),
            ));
        }
        if update
            .price_id
            .as_deref()
            .is_some_and(|id| !is_valid_price_id(id))
        {
            return Err(AppError::InvalidInput(
                "priceId inválido: debe contener \"price_\"".into(),
            ));
        }

        let user = self
            .repo
            .update_access_by_email(&email, &update)
            .await?
            .ok_or(AppError::UserNotFound)?;

        tracing::info!(user_id = %user.id, ?update, "User access updated");
        Ok(user)
    }
}

fn required_email(email: Option<&str>) -> AppResult<String> {
    let email = normalize_email(email.unwrap_or_default());
    if email.is_empty() {
        return Err(AppError::InvalidInput(EMAIL_REQUIRED.into()));
    }
    Ok(email)
}
