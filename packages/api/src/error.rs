//! Error type for backend calls.
//!
//! The `Display` text of every variant is what the status banner shows, so
//! messages are written for end users rather than developers.

/// Shown when `/api/users` fails without an `error` field.
pub const USERS_FALLBACK_ERROR: &str = "Failed to fetch users.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-success status; `message` comes from the body's `error` field.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response was received.
    #[error("Network error: {0}")]
    Transport(String),

    /// The body was not the JSON we expected.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
