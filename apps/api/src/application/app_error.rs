use thiserror::Error;

pub use shipfast_types::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Neither a session nor a valid admin key was provided")]
    AdminUnauthorized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Not found")]
    NotFound,

    /// The billing provider no longer knows the referenced object.
    #[error("Billing resource missing: {0}")]
    BillingResourceMissing(String),

    #[error("Billing provider error: {0}")]
    Billing(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// A server-side failure reported to the client with an endpoint-specific
    /// message; `detail` is only logged.
    #[error("{message}: {detail}")]
    Unexpected {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::Database(_)
                | AppError::BillingResourceMissing(_)
                | AppError::Billing(_)
                | AppError::Internal(_)
                | AppError::Unexpected { .. }
        )
    }

    /// Replace the generic message of a server-side failure. Client errors
    /// (400/401/404) pass through untouched.
    pub fn in_context(self, message: &'static str) -> Self {
        match self {
            AppError::Unexpected { .. } => self,
            err if err.is_server_error() => AppError::Unexpected {
                message,
                detail: err.to_string(),
            },
            err => err,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
