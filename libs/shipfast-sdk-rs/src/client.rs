//! HTTP client for the ShipFast API.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shipfast_types::{
    AccessResponse, AccessUpdateRequest, AccessUpdateResponse, ErrorBody, PurchasesResponse,
    UpdateEmailRequest, UploadPolicy, UploadResponse, UserDataResponse, UserProfile,
};
use url::Url;

use crate::error::ShipFastError;
use crate::uploader::{PendingFile, validate_batch};

const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Configuration for the ShipFast client.
#[derive(Debug, Clone)]
pub struct ShipFastConfig {
    /// Origin of the app (e.g., "https://app.example.com")
    pub base_url: String,

    /// Session token sent as a Bearer header
    pub access_token: Option<String>,

    /// Shared admin secret, only needed for the access endpoints
    pub admin_key: Option<String>,
}

pub struct ShipFastClient {
    base_url: Url,
    access_token: Option<String>,
    admin_key: Option<String>,
    upload_policy: UploadPolicy,
    http_client: reqwest::Client,
}

impl ShipFastClient {
    pub fn new(config: ShipFastConfig) -> Result<Self, ShipFastError> {
        if config.base_url.is_empty() {
            return Err(ShipFastError::Config("base_url is required".into()));
        }

        let mut raw = config.base_url;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| ShipFastError::Config(format!("invalid base_url: {e}")))?;

        Ok(Self {
            base_url,
            access_token: config.access_token,
            admin_key: config.admin_key,
            upload_policy: UploadPolicy::default(),
            http_client: reqwest::Client::new(),
        })
    }

    /// Use the limits the server was configured with.
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn upload_policy(&self) -> &UploadPolicy {
        &self.upload_policy
    }

    /// `GET /api/purchases`
    pub async fn purchases(&self) -> Result<PurchasesResponse, ShipFastError> {
        let request = self.authed(self.http_client.get(self.endpoint("api/purchases")?));
        handle_response(request.send().await?).await
    }

    /// `POST /api/user`
    pub async fn update_email(&self, email: &str) -> Result<UserProfile, ShipFastError> {
        let body = UpdateEmailRequest {
            email: email.to_string(),
        };
        let request = self
            .authed(self.http_client.post(self.endpoint("api/user")?))
            .json(&body);

        let response: UserDataResponse = handle_response(request.send().await?).await?;
        Ok(response.data)
    }

    /// `GET /api/admin/update-access?email=`
    pub async fn get_access(&self, email: &str) -> Result<AccessResponse, ShipFastError> {
        let request = self
            .admin(self.http_client.get(self.endpoint("api/admin/update-access")?))
            .query(&[("email", email)]);
        handle_response(request.send().await?).await
    }

    /// `POST /api/admin/update-access`
    pub async fn update_access(
        &self,
        update: &AccessUpdateRequest,
    ) -> Result<AccessUpdateResponse, ShipFastError> {
        let request = self
            .admin(self.http_client.post(self.endpoint("api/admin/update-access")?))
            .json(update);
        handle_response(request.send().await?).await
    }

    /// `POST /api/upload`
    ///
    /// The batch is checked against the upload policy first; a rejected
    /// batch never leaves the process.
    pub async fn upload_files(
        &self,
        files: &[PendingFile],
    ) -> Result<UploadResponse, ShipFastError> {
        if files.is_empty() {
            return Err(ShipFastError::NothingToUpload);
        }
        validate_batch(&self.upload_policy, files)?;

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.content_type)?;
            form = form.part("files", part);
        }

        let request = self
            .authed(self.http_client.post(self.endpoint("api/upload")?))
            .multipart(form);
        handle_response(request.send().await?).await
    }

    /// `GET /api/upload`
    pub async fn list_uploads(&self) -> Result<UploadResponse, ShipFastError> {
        let request = self.authed(self.http_client.get(self.endpoint("api/upload")?));
        handle_response(request.send().await?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ShipFastError> {
        self.base_url
            .join(path)
            .map_err(|e| ShipFastError::Config(format!("invalid endpoint {path}: {e}")))
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Admin endpoints accept either a session or the shared key.
    fn admin(&self, request: RequestBuilder) -> RequestBuilder {
        let request = self.authed(request);
        match &self.admin_key {
            Some(key) => request.header(ADMIN_KEY_HEADER, key),
            None => request,
        }
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ShipFastError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => (Some(body.code), body.error),
        Err(_) => (None, format!("HTTP {status}")),
    };

    Err(ShipFastError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
