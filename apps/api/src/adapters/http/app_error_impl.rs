use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shipfast_types::ErrorBody;

use crate::app_error::{AppError, ErrorCode};

const GENERIC_SERVER_ERROR: &str = "Error interno del servidor";
const BILLING_SERVER_ERROR: &str = "Error al comunicarse con el proveedor de pagos";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        match self {
            AppError::Database(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseError,
                GENERIC_SERVER_ERROR,
            ),
            AppError::InvalidCredentials => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "No autorizado")
            }
            AppError::NotSignedIn => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "No has iniciado sesión",
            ),
            AppError::AdminUnauthorized => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "No autorizado. Proporciona una sesión válida o x-admin-key header.",
            ),
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, &msg)
            }
            AppError::UserNotFound => error_resp(
                StatusCode::NOT_FOUND,
                ErrorCode::NotFound,
                "Usuario no encontrado",
            ),
            AppError::NotFound => error_resp(
                StatusCode::NOT_FOUND,
                ErrorCode::NotFound,
                "Recurso no encontrado",
            ),
            AppError::BillingResourceMissing(_) | AppError::Billing(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::BillingError,
                BILLING_SERVER_ERROR,
            ),
            AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                GENERIC_SERVER_ERROR,
            ),
            AppError::Unexpected { message, .. } => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                message,
            ),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "JSON body rejected");
        AppError::InvalidInput("Cuerpo de la solicitud inválido".into())
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
        code,
    };
    (status, Json(body)).into_response()
}
