use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    routing::post,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use shipfast_types::UserDataResponse;

use crate::{
    adapters::http::{app_state::AppState, session::current_session},
    app_error::{AppError, AppResult},
};

const UPDATE_FAILED: &str = "Algo salió mal";

pub fn router() -> Router<AppState> {
    Router::new().route("/user", post(update_email))
}

#[derive(Deserialize)]
struct UpdateEmailPayload {
    email: Option<String>,
}

/// POST /api/user
/// Changes the email of the signed-in user.
async fn update_email(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    payload: Result<Json<UpdateEmailPayload>, JsonRejection>,
) -> AppResult<Json<UserDataResponse>> {
    let claims = current_session(&jar, &headers, &app_state).map_err(|_| AppError::NotSignedIn)?;
    let user_id = claims.user_id().map_err(|_| AppError::NotSignedIn)?;
    let Json(payload) = payload?;

    let user = app_state
        .user_use_cases
        .update_email(user_id, payload.email.as_deref())
        .await
        .map_err(|e| e.in_context(UPDATE_FAILED))?;

    Ok(Json(UserDataResponse {
        data: user.to_profile(),
    }))
}
