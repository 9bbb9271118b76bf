//! Client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;

/// Settings a client is constructed from.
///
/// `base_url` must point at the versioned API root; a missing trailing slash
/// is tolerated and added when the client is built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Enables request/response diagnostics through `tracing`.
    #[serde(default)]
    pub debug: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            js_key: None,
            base_url: default_base_url(),
            debug: false,
            timeout_secs: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_js_key(mut self, js_key: impl Into<String>) -> Self {
        self.js_key = Some(js_key.into());
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Turn diagnostics on for an existing configuration.
    pub fn enable_debug(&mut self) {
        self.debug = true;
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("js_key", &self.js_key)
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
