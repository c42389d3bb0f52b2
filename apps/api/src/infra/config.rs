use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use shipfast_types::UploadPolicy;

use crate::{domain::entities::plan::PlanCatalog, infra::error::InfraError};

pub struct AppConfig {
    /// Verifies session tokens issued by the auth provider.
    pub jwt_secret: SecretString,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub database_url: String,
    /// Shared key accepted in `x-admin-key`. Unset disables key access; only
    /// sessions can reach the admin endpoints then.
    pub admin_secret: Option<SecretString>,
    /// Unset disables the billing history (purchases are always empty).
    pub stripe_secret_key: Option<SecretString>,
    pub plans: PlanCatalog,
    /// Directory uploads are written to.
    pub upload_dir: PathBuf,
    /// Public path `upload_dir` is served under.
    pub upload_public_prefix: String,
    pub upload_policy: UploadPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let jwt_secret = SecretString::new(get_env::<String>("JWT_SECRET").into());
        let database_url: String = get_env("DATABASE_URL");

        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "not a valid header value".into(),
                })?;

        let admin_secret = optional_env("ADMIN_SECRET").map(|s| SecretString::new(s.into()));
        let stripe_secret_key =
            optional_env("STRIPE_SECRET_KEY").map(|s| SecretString::new(s.into()));

        let plans = match optional_env("STRIPE_PLANS") {
            Some(raw) => PlanCatalog::from_json(&raw).map_err(|e| InfraError::ConfigInvalid {
                var: "STRIPE_PLANS",
                reason: e.to_string(),
            })?,
            None => PlanCatalog::default(),
        };

        let upload_dir: PathBuf = get_env_default("UPLOAD_DIR", PathBuf::from("public/uploads"));
        let upload_public_prefix = public_prefix(&get_env_default(
            "UPLOAD_PUBLIC_PREFIX",
            "/uploads".to_string(),
        ))?;
        let defaults = UploadPolicy::default();
        let upload_policy = UploadPolicy::new(
            get_env_default("UPLOAD_MAX_FILES", defaults.max_files),
            get_env_default("UPLOAD_MAX_SIZE_MB", defaults.max_size_mb),
        );

        Ok(Self {
            jwt_secret,
            bind_addr,
            cors_origin,
            database_url,
            admin_secret,
            stripe_secret_key,
            plans,
            upload_dir,
            upload_public_prefix,
            upload_policy,
        })
    }
}

/// Unset and empty are the same thing.
fn optional_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `/uploads/` and `/uploads` name the same mount point. The root is refused
/// since it would shadow `/api`.
fn public_prefix(raw: &str) -> Result<String, InfraError> {
    let prefix = raw.trim().trim_end_matches('/');
    if !prefix.starts_with('/') {
        return Err(InfraError::ConfigInvalid {
            var: "UPLOAD_PUBLIC_PREFIX",
            reason: "must be an absolute path other than /".into(),
        });
    }
    Ok(prefix.to_string())
}
