use sqlx::PgPool;

use crate::app_error::AppError;

pub mod user;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                // PostgreSQL unique violation
                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    AppError::InvalidInput("Ya existe un registro con ese valor".into())
                }
                // PostgreSQL check violation (billing id formats)
                else if msg.contains("violates check constraint") {
                    AppError::InvalidInput("Valor inválido".into())
                }
                // PostgreSQL not-null violation
                else if msg.contains("null value") && msg.contains("violates not-null") {
                    AppError::InvalidInput("Falta un campo requerido".into())
                } else {
                    // Log the actual error for debugging, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
