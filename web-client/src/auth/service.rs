// web-client/src/auth/service.rs
use std::sync::Arc;

use serde_json::Value;

use common::models::session::UserIdentity;
use common::utils::token_expired;

use crate::error::ApiError;
use crate::pipeline::{ApiClient, Attachment};
use crate::storage::{SessionStore, IDENTITY_KEY, TOKEN_KEY};

use super::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

/// Sole writer of the session store. Issues the auth requests, persists
/// their results, and answers the synchronous session queries the route
/// guards run on every mount.
pub struct AuthService {
    api: Arc<ApiClient>,
    store: Arc<SessionStore>,
}

impl AuthService {
    /// Construction inspects any stored token's expiry claim and evicts a
    /// stale session. Runs synchronously, so the store is settled before
    /// the first guard can read it.
    pub fn new(api: Arc<ApiClient>, store: Arc<SessionStore>) -> Self {
        if let Some(token) = store.get(TOKEN_KEY) {
            if token_expired(&token) {
                tracing::info!("Stored token is expired; evicting session");
                store.clear_session();
            }
        }

        Self { api, store }
    }

    /// Authenticate and persist the resulting session. Token and identity
    /// are written together; the guard treats them as one unit.
    pub async fn login(&self, credentials: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.api.post_json("/auth/login", &credentials).await?;

        let identity = UserIdentity::new(response.user_id, response.roles.clone());
        let blob = identity
            .to_json()
            .map_err(|e| ApiError::Decode { message: e.to_string() })?;

        self.store.set(TOKEN_KEY, &response.token);
        self.store.set(IDENTITY_KEY, &blob);

        tracing::info!("Logged in user {}", response.user_id);
        Ok(response)
    }

    /// Register a new account. Always transmits as multipart, with or
    /// without attachments, because the backend accepts only that shape.
    /// Does not log the new account in.
    pub async fn signup(
        &self,
        profile: SignupRequest,
        attachments: Vec<Attachment>,
    ) -> Result<String, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", profile.name)
            .text("email", profile.email)
            .text("mobile", profile.mobile)
            .text("password", profile.password)
            .text("role", profile.role.as_str())
            .text("ward", profile.ward)
            .text("address", profile.address);

        for attachment in attachments {
            form = form.part("documents", attachment.into_part()?);
        }

        let response: SignupResponse = self.api.post_multipart("/auth/signup", form).await?;
        Ok(response.message)
    }

    /// Best-effort server notification; local eviction never depends on
    /// the network outcome.
    pub async fn logout(&self) {
        if let Err(e) = self.api.post_json::<Value, Value>("/auth/logout", &Value::Null).await {
            tracing::debug!("Logout notification failed: {}", e);
        }
        self.store.clear_session();
        tracing::info!("Session cleared");
    }

    /// Pure read; no network call
    pub fn is_authenticated(&self) -> bool {
        self.store.get(TOKEN_KEY).is_some()
    }

    /// Pure read; a corrupt identity blob reads as absent
    pub fn current_user(&self) -> Option<UserIdentity> {
        let blob = self.store.get(IDENTITY_KEY)?;
        match UserIdentity::from_json(&blob) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!("Stored identity is unreadable: {}", e);
                None
            }
        }
    }

    /// Fetch the server-side view of the current account
    pub async fn profile(&self) -> Result<UserIdentity, ApiError> {
        self.api.get("/auth/profile").await
    }
}
