//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::error::{ApiError, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Fails if the level is not
/// a valid filter or a subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| ApiError::config(format!("Invalid log level {:?}: {}", default_level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ApiError::config(format!("Failed to initialize logging: {}", e)))
}
