// web-client/src/services/tickets.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;
use crate::pipeline::{ApiClient, Attachment};

/// Ticket lifecycle states as the backend reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    Resolved,
    Rejected,
}

/// A reported infrastructure issue
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TicketStatus,
    pub ward: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields of the report-issue form
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: String,
    pub ward: String,
}

/// Thin wrapper over the ticket endpoints
pub struct TicketService {
    api: Arc<ApiClient>,
}

impl TicketService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, ApiError> {
        self.api.get("/api/tickets").await
    }

    pub async fn get(&self, id: i64) -> Result<Ticket, ApiError> {
        self.api.get(&format!("/api/tickets/{}", id)).await
    }

    /// The report form ships photos alongside the fields, so creation is
    /// multipart like the other upload endpoints.
    pub async fn create(&self, ticket: NewTicket, photos: Vec<Attachment>) -> Result<Ticket, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("title", ticket.title)
            .text("description", ticket.description)
            .text("category", ticket.category)
            .text("ward", ticket.ward);

        for photo in photos {
            form = form.part("photos", photo.into_part()?);
        }

        self.api.post_multipart("/api/tickets", form).await
    }

    pub async fn update_status(&self, id: i64, status: TicketStatus) -> Result<Ticket, ApiError> {
        self.api
            .put_json(&format!("/api/tickets/{}/status", id), &json!({ "status": status }))
            .await
    }
}
