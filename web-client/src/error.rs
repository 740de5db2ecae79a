// web-client/src/error.rs
use thiserror::Error;

/// Normalized error shape returned by every service call. The `Display`
/// text is the user-facing message; callers surface it as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received at all (refused, timed out, DNS failure)
    #[error("cannot connect to server")]
    Network(#[source] reqwest::Error),

    /// The endpoint does not exist on the backend
    #[error("endpoint not found: {path}")]
    NotFound { path: String },

    /// Authentication rejected; the session has already been evicted and
    /// a hard redirect to the login screen issued
    #[error("{message}")]
    AuthRejected { message: String },

    /// Backend failure; retrying later is the only recourse
    #[error("{message}")]
    Server { message: String },

    /// Validation/business error, message supplied by the backend verbatim
    #[error("{message}")]
    Validation { message: String },

    /// The backend answered success with a body we could not interpret
    #[error("malformed response from server: {message}")]
    Decode { message: String },

    /// Client-side construction failure
    #[error("client setup failed: {message}")]
    Setup { message: String },
}
