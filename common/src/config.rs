// common/src/config.rs
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use config::{Config as ConfigFile, File, Environment};

/// Central configuration for the client core
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Backend origin every request is dispatched against
    pub api_base_url: String,
    /// Fixed per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Hard-redirect target when the backend rejects the session
    pub login_path: String,
    /// Directory backing the persistent session store; unset or empty
    /// disables persistence entirely
    pub session_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 10,
            login_path: "/login/citizen".to_string(),
            session_dir: Some("./.session".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        // Get the run mode, defaulting to "development"
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        // Locate the config directory
        let config_dir = env::var("CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Check if we're in the project root or a subcrate
                let mut path = PathBuf::from("./config");
                if !path.exists() {
                    path = PathBuf::from("../config");
                }
                path
            });

        tracing::info!("Loading configuration from {}", config_dir.display());
        tracing::info!("Using run mode: {}", run_mode);

        // Build configuration
        let config = ConfigFile::builder()
            // Start with defaults
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add environment specific config
            .add_source(File::from(config_dir.join(format!("{}.toml", run_mode))).required(false))
            // Add a local config file for local overrides
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment variables with prefix "APP"
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Build and deserialize
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load from environment variables directly (backward compatibility)
    pub fn from_env() -> Self {
        // Try to load from file first
        match Self::load() {
            Ok(config) => {
                tracing::info!("Configuration loaded from files and environment");
                config
            },
            Err(e) => {
                tracing::warn!("Failed to load configuration from files: {}", e);
                tracing::info!("Falling back to environment variables only");

                let defaults = Config::default();

                let api_base_url = env::var("API_BASE_URL")
                    .unwrap_or(defaults.api_base_url);

                let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(defaults.request_timeout_secs);

                let login_path = env::var("LOGIN_PATH")
                    .unwrap_or(defaults.login_path);

                let session_dir = env::var("SESSION_DIR")
                    .ok()
                    .or(defaults.session_dir);

                Self {
                    api_base_url,
                    request_timeout_secs,
                    login_path,
                    session_dir,
                }
            }
        }
    }
}
