use movie_directory::{DirectoryConfig, OmdbService};

/// Default listen address when `API_ADDRESS` is unset.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address, e.g. "0.0.0.0:3000".
    pub address: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            address: std::env::var("API_ADDRESS")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADDRESS.into()),
        }
    }
}

/// Shared state for all HTTP handlers.
///
/// Holds only the directory client and config; screens are created per
/// request and never shared.
pub struct AppState {
    /// Pooled client for the movie directory.
    pub directory: OmdbService,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(directory: OmdbService, config: ApiConfig) -> Self {
        Self { directory, config }
    }

    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Fails when the directory config is missing or invalid.
    pub fn from_env() -> Result<Self, movie_directory::DirectoryError> {
        let directory = OmdbService::new(DirectoryConfig::from_env()?)?;
        Ok(Self::new(directory, ApiConfig::from_env()))
    }
}
