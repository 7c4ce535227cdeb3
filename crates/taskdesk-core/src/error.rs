//! Client Errors
//!
//! Error types for API calls and the workflows built on them.

use serde::Deserialize;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the remote API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Non-2xx response, with the FastAPI `detail` message when present
    Status { status: u16, detail: Option<String> },
    /// Response body did not match the expected shape
    Decode(String),
    /// Persistent token storage unavailable
    Storage(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: serde_json::Value,
        }

        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.detail {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                // Validation errors come back as an array of objects
                other => Some(other.to_string()),
            });
        ApiError::Status { status, detail }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, detail: Some(d) } => write!(f, "HTTP {}: {}", status, d),
            ApiError::Status { status, detail: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Sign-in and registration failures
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidCredentials,
    Registration(Option<String>),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::Registration(Some(detail)) => write!(f, "{}", detail),
            AuthError::Registration(None) => write!(f, "Registration failed"),
        }
    }
}

impl std::error::Error for AuthError {}
