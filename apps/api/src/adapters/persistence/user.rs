use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::user::{AccessUpdate, User},
    use_cases::user::UserRepo,
};

// User struct as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct UserDb {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub customer_id: Option<String>,
    pub price_id: Option<String>,
    pub has_access: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<UserDb> for User {
    fn from(row: UserDb) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            image: row.image,
            customer_id: row.customer_id,
            price_id: row.price_id,
            has_access: row.has_access,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepo for PostgresPersistence {
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserDb>(
            r#"
                SELECT id, name, email, image, customer_id, price_id, has_access,
                       created_at, updated_at
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(User::from))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserDb>(
            r#"
                SELECT id, name, email, image, customer_id, price_id, has_access,
                       created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(User::from))
    }

    async fn update_access_by_email(
        &self,
        email: &str,
        update: &AccessUpdate,
    ) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserDb>(
            r#"
                UPDATE users
                SET has_access = COALESCE($2, has_access),
                    customer_id = COALESCE($3, customer_id),
                    price_id = COALESCE($4, price_id),
                    updated_at = (now() AT TIME ZONE 'utc')
                WHERE email = $1
                RETURNING id, name, email, image, customer_id, price_id, has_access,
                          created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(update.has_access)
        .bind(update.customer_id.as_deref())
        .bind(update.price_id.as_deref())
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(User::from))
    }

    async fn update_email(&self, user_id: Uuid, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserDb>(
            r#"
                UPDATE users
                SET email = $2,
                    has_access = COALESCE(has_access, false),
                    updated_at = (now() AT TIME ZONE 'utc')
                WHERE id = $1
                RETURNING id, name, email, image, customer_id, price_id, has_access,
                          created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(User::from))
    }

    async fn clear_billing(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserDb>(
            r#"
                UPDATE users
                SET customer_id = NULL,
                    price_id = NULL,
                    has_access = false,
                    updated_at = (now() AT TIME ZONE 'utc')
                WHERE id = $1
                RETURNING id, name, email, image, customer_id, price_id, has_access,
                          created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(User::from))
    }
}
