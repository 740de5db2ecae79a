// web-client/src/services/workers.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::pipeline::ApiClient;

/// A field worker managed by a contractor account
#[derive(Debug, Clone, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub ward: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewWorker {
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
}

/// Thin wrapper over the contractor worker-roster endpoints
pub struct WorkerService {
    api: Arc<ApiClient>,
}

impl WorkerService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Worker>, ApiError> {
        self.api.get("/api/contractor/workers").await
    }

    pub async fn add(&self, worker: NewWorker) -> Result<Worker, ApiError> {
        self.api.post_json("/api/contractor/workers", &worker).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        let _: Value = self
            .api
            .delete(&format!("/api/contractor/workers/{}", id))
            .await?;
        Ok(())
    }
}
