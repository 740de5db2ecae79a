// web-client/src/lib.rs
pub mod auth;
pub mod error;
pub mod guard;
pub mod locale;
pub mod navigator;
pub mod pipeline;
pub mod services;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use common::Config;

use crate::auth::AuthService;
use crate::error::ApiError;
use crate::navigator::Navigator;
use crate::pipeline::ApiClient;
use crate::storage::SessionStore;

/// Everything a page needs to talk to the backend. Built once at
/// application root and passed down explicitly; no ambient globals.
pub struct SessionContext {
    pub store: Arc<SessionStore>,
    pub api: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
}

impl SessionContext {
    /// Construct the session core in dependency order: store, then
    /// pipeline, then the auth service whose constructor runs the
    /// stored-token expiry check. By the time this returns, the store is
    /// settled and safe for guard reads.
    pub fn bootstrap(config: &Config, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let session_dir = config
            .session_dir
            .as_ref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let store = Arc::new(SessionStore::open(session_dir));
        let api = Arc::new(ApiClient::new(config, store.clone(), navigator)?);
        let auth = Arc::new(AuthService::new(api.clone(), store.clone()));

        Ok(Self { store, api, auth })
    }
}
