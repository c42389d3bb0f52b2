//! Manual access management, guarded by a session or the shared admin key.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::HeaderMap,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::Value;
use shipfast_types::{AccessResponse, AccessUpdateResponse};

use crate::{
    adapters::http::{app_state::AppState, session::authorize_admin},
    app_error::AppResult,
    domain::entities::user::AccessUpdate,
};

const GET_FAILED: &str = "Error al obtener usuario";
const UPDATE_FAILED: &str = "Error al actualizar usuario";

pub fn router() -> Router<AppState> {
    Router::new().route("/update-access", get(get_access).post(update_access))
}

#[derive(Deserialize)]
struct AccessQuery {
    email: Option<String>,
}

/// Loosely typed on purpose: fields of the wrong type are ignored rather than
/// rejected, so `"hasAccess": "true"` does not count as an update.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccessPayload {
    email: Option<String>,
    #[serde(default)]
    has_access: Value,
    #[serde(default)]
    customer_id: Value,
    #[serde(default)]
    price_id: Value,
}

impl UpdateAccessPayload {
    fn access_update(&self) -> AccessUpdate {
        AccessUpdate {
            has_access: self.has_access.as_bool(),
            customer_id: non_empty_string(&self.customer_id),
            price_id: non_empty_string(&self.price_id),
        }
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// GET /api/admin/update-access?email=
async fn get_access(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<AccessQuery>,
) -> AppResult<Json<AccessResponse>> {
    authorize_admin(&jar, &headers, &app_state)?;

    let user = app_state
        .admin_access_use_cases
        .get_access(query.email.as_deref())
        .await
        .map_err(|e| e.in_context(GET_FAILED))?;

    Ok(Json(AccessResponse {
        user: user.to_access_user(),
    }))
}

/// POST /api/admin/update-access
async fn update_access(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    payload: Result<Json<UpdateAccessPayload>, JsonRejection>,
) -> AppResult<Json<AccessUpdateResponse>> {
    authorize_admin(&jar, &headers, &app_state)?;
    let Json(payload) = payload?;

    let user = app_state
        .admin_access_use_cases
        .update_access(payload.email.as_deref(), payload.access_update())
        .await
        .map_err(|e| e.in_context(UPDATE_FAILED))?;

    Ok(Json(AccessUpdateResponse {
        message: "Usuario actualizado correctamente".to_string(),
        user: user.to_access_user(),
    }))
}
