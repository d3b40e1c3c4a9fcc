//! # Wire bodies exchanged with the backend
//!
//! - [`MessageBody`] — success body of the three form endpoints (`{"message": ...}`).
//! - [`ErrorBody`] — error body of every endpoint (`{"error": ...}`). The login
//!   endpoint adds `locked_until` (ISO-8601) when the account is locked out.
//! - [`UserRecord`] — one element of the `/api/users` array. Read-only on the
//!   client; the users table renders it and never sends it back.

use serde::{Deserialize, Serialize};

/// Success body of the form endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

/// Error body. `error` is optional because `/api/users` may fail without one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_until: Option<String>,
}

/// Account summary returned by `/api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub failed_attempts: i64,
    pub locked_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_from_backend_json() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[{"id":1,"username":"bob","failed_attempts":3,"locked_out":true},
                {"id":2,"username":"eve","failed_attempts":0,"locked_out":false}]"#,
        )
        .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "bob");
        assert!(users[0].locked_out);
        assert_eq!(users[1].failed_attempts, 0);
    }

    #[test]
    fn test_error_body_with_lockout() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":"Account locked. Try again later.","locked_until":"2025-01-01T10:02:00"}"#,
        )
        .unwrap();
        assert_eq!(body.error.as_deref(), Some("Account locked. Try again later."));
        assert_eq!(body.locked_until.as_deref(), Some("2025-01-01T10:02:00"));
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ErrorBody::default());
    }
}
