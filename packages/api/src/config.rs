//! # Client configuration — `formbridge.toml`
//!
//! Tells the frontend where the backend lives and which paths its endpoints
//! use. The web binary embeds the file at build time.
//!
//! ```toml
//! [api]
//! base_url = ""            # empty = same origin as the page
//!
//! [paths]
//! register = "/api/register"
//! login = "/api/login"
//! reset = "/api/reset"
//! users = "/api/users"
//! ```
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::Endpoint;

/// Top-level configuration stored in `formbridge.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub paths: PathsSection,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Scheme and host of the backend, without a trailing path.
    /// Empty string means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

/// Endpoint paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub register: String,
    pub login: String,
    pub reset: String,
    pub users: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            register: "/api/register".to_string(),
            login: "/api/login".to_string(),
            reset: "/api/reset".to_string(),
            users: "/api/users".to_string(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "formbridge.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn path_for(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Register => &self.paths.register,
            Endpoint::Login => &self.paths.login,
            Endpoint::Reset => &self.paths.reset,
            Endpoint::Users => &self.paths.users,
        }
    }

    /// Absolute (or origin-relative, when `base_url` is empty) URL of an endpoint.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        let base = self.api.base_url.trim_end_matches('/');
        let path = self.path_for(endpoint);
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
