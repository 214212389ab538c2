//! Directory config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OMDB_API_KEY`      = API key (mandatory; `NEXT_PUBLIC_OMDB_API_KEY` is accepted as a fallback)
//! - `OMDB_URL`          = base endpoint, default `https://www.omdbapi.com`
//! - `OMDB_MEDIA_TYPE`   = search scope (`movie`, `series`, `episode`), default `movie`
//! - `OMDB_TIMEOUT_SECS` = per-request timeout, default 10

use std::fmt;

use crate::{
    config::media_type::MediaType,
    error_handler::{ConfigError, Result, env_opt_u64, must_env, opt_env, validate_http_endpoint},
};

pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the movie directory.
#[derive(Clone)]
pub struct DirectoryConfig {
    /// Base URL, e.g. `https://www.omdbapi.com`.
    pub endpoint: String,
    /// Static API key appended to every request.
    pub api_key: String,
    /// Search scope passed as `type`.
    pub media_type: MediaType,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DirectoryConfig {
    /// Config with defaults for everything but the endpoint and key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            media_type: MediaType::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the config strictly from environment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingVar`] if no API key is set
    /// - [`ConfigError::InvalidFormat`] if `OMDB_URL` is not http/https
    /// - [`ConfigError::InvalidNumber`] if `OMDB_TIMEOUT_SECS` is not a u64
    /// - [`ConfigError::UnsupportedMediaType`] for unknown `OMDB_MEDIA_TYPE`
    pub fn from_env() -> Result<Self> {
        let api_key = match opt_env("OMDB_API_KEY") {
            Some(key) => key,
            None => must_env("NEXT_PUBLIC_OMDB_API_KEY")
                .map_err(|_| ConfigError::MissingVar("OMDB_API_KEY"))?,
        };

        let endpoint = opt_env("OMDB_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_http_endpoint("OMDB_URL", &endpoint)?;

        let media_type = match opt_env("OMDB_MEDIA_TYPE") {
            Some(v) => v.parse::<MediaType>()?,
            None => MediaType::default(),
        };

        let timeout_secs = env_opt_u64("OMDB_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            api_key: api_key.trim().to_string(),
            media_type,
            timeout_secs,
        })
    }
}

// Keeps the key out of debug logs.
impl fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("media_type", &self.media_type)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_masks_api_key() {
        let cfg = DirectoryConfig::new("https://www.omdbapi.com", "secret-key");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("secret-key"));
        assert!(dbg.contains("omdbapi"));
        assert_eq!(cfg.media_type, MediaType::Movie);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
