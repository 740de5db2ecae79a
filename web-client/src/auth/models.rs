// web-client/src/auth/models.rs
use serde::{Deserialize, Serialize};

use common::models::role::Role;

/// Login request body. Accounts sign in with either identifier; the
/// absent one is omitted on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
}

impl LoginRequest {
    pub fn with_email(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            mobile: None,
            password: password.to_string(),
        }
    }

    pub fn with_mobile(mobile: &str, password: &str) -> Self {
        Self {
            email: None,
            mobile: Some(mobile.to_string()),
            password: password.to_string(),
        }
    }
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub roles: Vec<Role>,
}

/// Signup profile fields; file attachments ride alongside as multipart
/// file parts
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub role: Role,
    pub ward: String,
    pub address: String,
}

/// Confirmation payload returned by signup
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}
