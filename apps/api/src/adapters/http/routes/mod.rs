pub mod admin;
pub mod health;
pub mod purchases;
pub mod upload;
pub mod user;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/admin", admin::router())
        .merge(purchases::router())
        .merge(user::router())
        .merge(upload::router())
}
