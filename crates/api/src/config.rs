//! Configuration, loaded from environment variables at startup.
//!
//! A `.env` file is honored for local development; tests construct their
//! state directly and never touch the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing the environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for the environment variable {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Everything the service needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Shared secret callers present as `Authorization: Bearer <token>`.
    pub service_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Root under which artifacts and their backups live.
    pub storage_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str = std::env::var("VIEWSMITH_BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("VIEWSMITH_BIND_ADDRESS", e.to_string()))?;

        let service_token = std::env::var("VIEWSMITH_SERVICE_TOKEN")
            .map_err(|_| ConfigError::MissingVar("VIEWSMITH_SERVICE_TOKEN"))?;

        let openai_api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let storage_root = std::env::var("VIEWSMITH_STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./generated"));

        Ok(Self {
            bind_address,
            service_token,
            openai_api_key,
            openai_base_url,
            storage_root,
        })
    }
}
