//! # API crate — the HTTP contract between the FormBridge frontend and its backend
//!
//! Everything the UI needs to talk to the backend lives here, free of any
//! rendering concerns so it can be unit-tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: `submit` for the three forms, `fetch_users` for the users table |
//! | [`config`] | [`ClientConfig`]: `formbridge.toml` with the base URL and endpoint paths |
//! | [`error`] | [`ApiError`]: server, transport and decode failures |
//! | [`form`] | [`FormSubmission`]: flat field-name → value mapping sent as JSON |
//! | [`models`] | Wire bodies: [`UserRecord`], [`MessageBody`], [`ErrorBody`] |
//! | [`transport`] | [`Transport`] trait plus [`HttpTransport`] (reqwest) |
//!
//! [`MemoryTransport`] replays queued responses and records requests; it backs
//! the tests of this crate and of `ui`.
//!
//! ## Endpoints
//!
//! | [`Endpoint`] | Method | Default path |
//! |--------------|--------|--------------|
//! | `Register` | POST | `/api/register` |
//! | `Login` | POST | `/api/login` |
//! | `Reset` | POST | `/api/reset` |
//! | `Users` | GET | `/api/users` |

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod transport;

mod memory;
pub use memory::MemoryTransport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, USERS_FALLBACK_ERROR};
pub use form::FormSubmission;
pub use models::{ErrorBody, MessageBody, UserRecord};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// The backend calls the frontend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    Login,
    Reset,
    Users,
}

impl Endpoint {
    /// HTTP method used for this endpoint.
    pub fn method(self) -> Method {
        match self {
            Endpoint::Users => Method::Get,
            Endpoint::Register | Endpoint::Login | Endpoint::Reset => Method::Post,
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Register => "register",
            Endpoint::Login => "login",
            Endpoint::Reset => "reset",
            Endpoint::Users => "users",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
