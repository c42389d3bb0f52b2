use axum::{Router, http};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use uuid::Uuid;

use crate::{
    adapters::{self, http::app_state::AppState, http::session::ADMIN_KEY_HEADER},
    infra::setup::init_tracing,
};

pub fn create_app(app_state: AppState) -> Router {
    init_tracing();

    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            http::HeaderName::from_static(ADMIN_KEY_HEADER),
        ])
        .allow_credentials(true);

    let uploads = ServeDir::new(&app_state.config.upload_dir);
    let upload_prefix = app_state.config.upload_public_prefix.clone();

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .nest_service(&upload_prefix, uploads)
        .with_state(app_state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http-request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id = %request_id
                )
            }),
        )
}
