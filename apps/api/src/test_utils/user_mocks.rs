//! In-memory mock implementations for the user repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::user::{AccessUpdate, User},
    use_cases::user::UserRepo,
};

// ============================================================================
// InMemoryUserRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepo {
    pub users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let map: HashMap<Uuid, User> = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Mutex::new(map),
        }
    }

    /// Current stored state of a user, for assertions.
    pub fn get(&self, user_id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&user_id).cloned()
    }

    fn modify(&self, user_id: Uuid, change: impl FnOnce(&mut User)) -> Option<User> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&user_id)?;
        change(user);
        user.updated_at = Some(Utc::now().naive_utc());
        Some(user.clone())
    }

    fn id_by_email(&self, email: &str) -> Option<Uuid> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .map(|u| u.id)
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        Ok(self.get(user_id))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.id_by_email(email).and_then(|id| self.get(id)))
    }

    async fn update_access_by_email(
        &self,
        email: &str,
        update: &AccessUpdate,
    ) -> AppResult<Option<User>> {
        Ok(self
            .id_by_email(email)
            .and_then(|id| self.modify(id, |user| update.apply_to(user))))
    }

    async fn update_email(&self, user_id: Uuid, email: &str) -> AppResult<Option<User>> {
        if self
            .id_by_email(email)
            .is_some_and(|owner| owner != user_id)
        {
            return Err(AppError::InvalidInput(
                "Ya existe un registro con ese valor".into(),
            ));
        }
        Ok(self.modify(user_id, |user| user.email = Some(email.to_string())))
    }

    async fn clear_billing(&self, user_id: Uuid) -> AppResult<Option<User>> {
        Ok(self.modify(user_id, |user| {
            user.customer_id = None;
            user.price_id = None;
            user.has_access = false;
        }))
    }
}

// ============================================================================
// FailingUserRepo
// ============================================================================

/// Every call fails like a lost database connection.
pub struct FailingUserRepo;

impl FailingUserRepo {
    fn fail<T>() -> AppResult<T> {
        Err(AppError::Database("connection refused".into()))
    }
}

#[async_trait]
impl UserRepo for FailingUserRepo {
    async fn get_by_id(&self, _user_id: Uuid) -> AppResult<Option<User>> {
        Self::fail()
    }

    async fn get_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Self::fail()
    }

    async fn update_access_by_email(
        &self,
        _email: &str,
        _update: &AccessUpdate,
    ) -> AppResult<Option<User>> {
        Self::fail()
    }

    async fn update_email(&self, _user_id: Uuid, _email: &str) -> AppResult<Option<User>> {
        Self::fail()
    }

    async fn clear_billing(&self, _user_id: Uuid) -> AppResult<Option<User>> {
        Self::fail()
    }
}
