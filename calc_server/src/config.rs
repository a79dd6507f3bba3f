//! Service configuration
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed `PROJEL_` (e.g. `PROJEL_PORT=9000`)
//! 2. The file given with `--config` (TOML or JSON), or `config/projel.toml`
//! 3. Built-in defaults

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config/projel.toml";

/// Prefix of the environment overrides
pub const ENV_PREFIX: &str = "PROJEL_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported by the root and health endpoints
    pub project_name: String,

    /// Prefix of every API route (e.g. "/api/v1")
    pub api_prefix: String,

    pub host: String,

    pub port: u16,

    /// Allowed CORS origins; `"*"` allows any origin
    pub cors_origins: Vec<String>,

    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            project_name: "PROJEL API".to_string(),
            api_prefix: "/api/v1".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from defaults, file and environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path, ENV_PREFIX)?
            .extract()
            .map_err(|e| ApiError::config(format!("Failed to load configuration: {}", e)))
    }

    /// Build the provider chain without extracting it.
    pub fn figment(path: Option<&Path>, env_prefix: &str) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(ServerConfig::default()));

        let figment = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ApiError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                match path.extension().and_then(|s| s.to_str()) {
                    Some("toml") => figment.merge(Toml::file(path)),
                    Some("json") => figment.merge(Json::file(path)),
                    other => {
                        return Err(ApiError::config(format!(
                            "Unsupported config file format: {}",
                            other.unwrap_or("<none>")
                        )))
                    }
                }
            }
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        Ok(figment.merge(Env::prefixed(env_prefix)))
    }

    /// Reject settings the router cannot be built with.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(ApiError::config("project_name must not be empty"));
        }
        if self.port == 0 {
            return Err(ApiError::config("port must not be 0"));
        }
        if !self.api_prefix.starts_with('/') || self.api_prefix.len() < 2 || self.api_prefix.ends_with('/') {
            return Err(ApiError::config(format!(
                "api_prefix must start with '/' and not end with it: {:?}",
                self.api_prefix
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}
