use std::{error::Error, path::PathBuf};

use movie_directory::telemetry::{self, TARGET_PREFIX};
use tracing::{Level, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let (filter, dotenv) = env_filter(dotenvy::dotenv);
    let not_directory = filter::filter_fn(|meta| !meta.target().starts_with(TARGET_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_filter(not_directory))
        .with(telemetry::layer())
        .try_init()?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env loaded, using process environment"),
    }

    api::start().await?;

    Ok(())
}

/// Loads `.env` first, then builds the global filter from RUST_LOG (default
/// "info"). The directory client's own events go through its dedicated layer
/// at DEBUG.
///
/// The load result is handed back so it can be logged once the subscriber
/// is installed.
fn env_filter(
    load_env: impl FnOnce() -> dotenvy::Result<PathBuf>,
) -> (EnvFilter, dotenvy::Result<PathBuf>) {
    let loaded = load_env();
    (telemetry::env_filter_with_level("info", Level::DEBUG), loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_from_env_file_reaches_the_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RUST_LOG=warn,movie_search=trace\n").unwrap();

        let (filter, loaded) = env_filter(|| dotenvy::from_path_override(&path).map(|_| path.clone()));

        assert_eq!(loaded.unwrap(), path);
        let rendered = filter.to_string();
        assert!(rendered.contains("movie_search=trace"), "{rendered}");
        assert!(rendered.contains("movie_directory=debug"), "{rendered}");
    }

    #[test]
    fn missing_env_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");

        let (_, loaded) = env_filter(|| dotenvy::from_path(&path).map(|_| path.clone()));

        assert!(loaded.is_err());
    }
}
