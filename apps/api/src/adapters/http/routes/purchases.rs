use axum::{Json, Router, extract::State, http::HeaderMap, routing::get};
use axum_extra::extract::cookie::CookieJar;
use shipfast_types::PurchasesResponse;

use crate::{
    adapters::http::{app_state::AppState, session::current_session},
    app_error::AppResult,
    use_cases::purchases::Viewer,
};

const LIST_FAILED: &str = "Error al obtener las compras";

pub fn router() -> Router<AppState> {
    Router::new().route("/purchases", get(list_purchases))
}

/// GET /api/purchases
/// Account summary and billing history of the signed-in user.
async fn list_purchases(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<Json<PurchasesResponse>> {
    let claims = current_session(&jar, &headers, &app_state)?;
    let viewer = Viewer {
        user_id: claims.user_id()?,
        name: claims.name,
        email: claims.email,
    };

    let response = app_state
        .purchases_use_cases
        .list(&viewer)
        .await
        .map_err(|e| e.in_context(LIST_FAILED))?;

    Ok(Json(response))
}
