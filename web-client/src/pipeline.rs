// web-client/src/pipeline.rs
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use common::Config;

use crate::error::ApiError;
use crate::navigator::Navigator;
use crate::storage::{SessionStore, TOKEN_KEY};

// Paths that must never carry a bearer credential
const NO_AUTH_PATHS: [&str; 2] = ["/auth/login", "/auth/signup"];

// Body substrings that mark a server-side expired-credential failure
const EXPIRED_CREDENTIAL_MARKERS: [&str; 2] = ["jwt expired", "token expired"];

/// HTTP client with the outbound and inbound interceptor stages applied
/// to every request: credential attach on the way out, error
/// normalization and session eviction on the way back.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    login_path: String,
    store: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        store: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Setup { message: e.to_string() })?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            store,
            navigator,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.prepare(Method::GET, path), path).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.prepare(Method::POST, path).json(body), path).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.prepare(Method::PUT, path).json(body), path).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.prepare(Method::DELETE, path), path).await
    }

    /// Multipart dispatch. The transport negotiates its own boundary;
    /// no JSON content-type is forced onto the request.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        self.dispatch(self.prepare(Method::POST, path).multipart(form), path).await
    }

    // Outbound stage: resolve the URL and attach credentials unless the
    // path is on the no-auth allow-list.
    fn prepare(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);

        if !is_no_auth_path(path) {
            if let Some(token) = self.store.get(TOKEN_KEY) {
                builder = builder.bearer_auth(token);
            }
        }

        builder
    }

    async fn dispatch<T: DeserializeOwned>(&self, builder: RequestBuilder, path: &str) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("No response from {}: {}", path, e);
            ApiError::Network(e)
        })?;

        self.handle_response(response, path).await
    }

    // Inbound stage: unwrap the data envelope on success, normalize every
    // failure, and evict the session where the status demands it.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response, path: &str) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            let value: Value = if body.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&body)
                    .map_err(|e| ApiError::Decode { message: e.to_string() })?
            };

            let payload = match value {
                Value::Object(mut map) if map.contains_key("data") => {
                    map.remove("data").unwrap_or(Value::Null)
                }
                other => other,
            };

            return serde_json::from_value(payload)
                .map_err(|e| ApiError::Decode { message: e.to_string() });
        }

        let message = error_message(&body, status);

        match status {
            StatusCode::UNAUTHORIZED => {
                // Evict first, then force a full-page redirect so no stale
                // application state survives.
                tracing::info!("Authentication rejected on {}; evicting session", path);
                self.store.clear_session();
                self.navigator.hard_redirect(&self.login_path);
                Err(ApiError::AuthRejected { message })
            }
            StatusCode::NOT_FOUND => {
                tracing::warn!("Endpoint not found: {}", path);
                Err(ApiError::NotFound { path: path.to_string() })
            }
            s if s.is_server_error() => {
                let lowered = message.to_lowercase();
                if EXPIRED_CREDENTIAL_MARKERS.iter().any(|marker| lowered.contains(marker)) {
                    // Softer eviction: the session is gone but the page
                    // keeps control of navigation.
                    tracing::info!("Server reports an expired credential; evicting session");
                    self.store.clear_session();
                }
                tracing::error!("Server error on {}: {}", path, message);
                Err(ApiError::Server {
                    message: "server error, please try again later".to_string(),
                })
            }
            _ => Err(ApiError::Validation { message }),
        }
    }
}

/// Whether requests to the path skip credential attachment
pub fn is_no_auth_path(path: &str) -> bool {
    NO_AUTH_PATHS.iter().any(|p| path.contains(p))
}

/// In-memory file attachment forwarded to the backend as a multipart part
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        }
    }

    /// Convert into a multipart file part
    pub fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ApiError::Validation {
                message: format!("invalid attachment content type: {}", e),
            })
    }
}

// Pull a human-readable message out of the backend's error envelope
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("request failed with status {}", status)
}
