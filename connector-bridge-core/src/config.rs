//! Runtime configuration consumed by the mocked bindings

use std::env;

/// Environment variable holding the fallback credential token
pub const ENV_TOKEN: &str = "CONNECTOR_BRIDGE_TOKEN";

/// Environment variable holding the fallback server url
pub const ENV_SERVER_URL: &str = "CONNECTOR_BRIDGE_SERVER_URL";

// Web tooling stringifies unset config values into this literal.
const UNSET_PLACEHOLDER: &str = "undefined";

/// Runtime configuration snapshot
///
/// Captured once at construction and injected into the bindings; the bindings
/// themselves never read the process environment.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Fallback credential token, if configured
    pub token: Option<String>,
    /// Fallback server url, if configured
    pub server_url: Option<String>,
}

impl RuntimeConfig {
    /// Create a configuration from raw values, sanitizing placeholders.
    #[must_use]
    pub fn new(token: Option<String>, server_url: Option<String>) -> Self {
        Self {
            token: token.and_then(sanitize),
            server_url: server_url.and_then(sanitize),
        }
    }

    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(ENV_TOKEN).ok(), env::var(ENV_SERVER_URL).ok())
    }

    /// Whether both values needed to synthesize the environment account are present.
    #[must_use]
    pub fn has_env_account(&self) -> bool {
        self.token.is_some() && self.server_url.is_some()
    }
}

/// Empty strings and the literal `"undefined"` count as unset.
fn sanitize(value: String) -> Option<String> {
    if value.is_empty() || value == UNSET_PLACEHOLDER {
        None
    } else {
        Some(value)
    }
}
