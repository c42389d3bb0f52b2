//! Multipart file upload for signed-in users.

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{Field, MultipartError, MultipartRejection},
    },
    http::HeaderMap,
    routing::post,
};
use axum_extra::extract::cookie::CookieJar;
use shipfast_types::{UploadPolicy, UploadResponse, UploadViolation};

use crate::{
    adapters::http::{app_state::AppState, session::current_session},
    app_error::{AppError, AppResult},
    use_cases::upload::IncomingFile,
};

const FILES_FIELD: &str = "files";
const UPLOAD_FAILED: &str = "Error al procesar los archivos";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub fn router() -> Router<AppState> {
    // Limits are enforced per file while the body streams in.
    Router::new().route(
        "/upload",
        post(upload_files)
            .get(list_uploads)
            .layer(DefaultBodyLimit::disable()),
    )
}

/// POST /api/upload
async fn upload_files(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let claims = current_session(&jar, &headers, &app_state)?;
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Multipart request rejected");
        AppError::InvalidInput("Se esperaba un formulario multipart".into())
    })?;

    let policy = app_state.upload_use_cases.policy();
    let files = read_files(&mut multipart, &policy).await?;

    let uploaded = app_state
        .upload_use_cases
        .upload(claims.email.as_deref(), files)
        .await
        .map_err(|e| e.in_context(UPLOAD_FAILED))?;

    Ok(Json(UploadResponse {
        success: true,
        message: Some(format!("{} archivo(s) subido(s) exitosamente", uploaded.len())),
        files: uploaded,
    }))
}

/// GET /api/upload
/// Uploads are not indexed; the listing is always empty.
async fn list_uploads(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<Json<UploadResponse>> {
    current_session(&jar, &headers, &app_state)?;

    Ok(Json(UploadResponse {
        success: true,
        files: Vec::new(),
        message: None,
    }))
}

/// Collect every `files` part, stopping as soon as the batch breaks the
/// policy so an oversized body is never buffered in full.
async fn read_files(multipart: &mut Multipart, policy: &UploadPolicy) -> AppResult<Vec<IncomingFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };

        if files.len() >= policy.max_files {
            return Err(violation(UploadViolation::TooManyFiles {
                max_files: policy.max_files,
            }));
        }

        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = read_limited(field, policy).await?;

        files.push(IncomingFile {
            name,
            content_type,
            bytes,
        });
    }

    Ok(files)
}

async fn read_limited(mut field: Field<'_>, policy: &UploadPolicy) -> AppResult<Vec<u8>> {
    let limit = policy.max_size_bytes();
    let mut bytes = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if (bytes.len() + chunk.len()) as u64 > limit {
            return Err(violation(UploadViolation::FileTooLarge {
                max_size_mb: policy.max_size_mb,
            }));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

fn violation(violation: UploadViolation) -> AppError {
    AppError::InvalidInput(violation.to_string())
}

fn multipart_error(err: MultipartError) -> AppError {
    tracing::debug!(error = %err, "Malformed multipart body");
    AppError::InvalidInput("Formulario multipart inválido".into())
}
