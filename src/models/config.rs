//! Configuration model loaded from external sources.

use serde::Deserialize;

const PRODUCTION: &str = "production";

#[derive(Clone, Debug, Deserialize)]
/// Process-wide settings, read once at startup.
pub struct ServerConfig {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding `index.html`, `favicon.ico` and anything else the
    /// fallback should treat as present on disk.
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION)
    }

    /// Debug mode disables HTTP caching; on everywhere except production.
    pub fn debug_mode(&self) -> bool {
        !self.is_production()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            address: default_address(),
            port: default_port(),
            root: default_root(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_environment() -> String {
    "development".into()
}

fn default_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

fn default_root() -> String {
    "./public".into()
}

fn default_request_timeout_secs() -> u64 {
    30
}
