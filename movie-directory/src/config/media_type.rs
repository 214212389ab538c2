use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error_handler::ConfigError;

/// Kind of title the directory search is restricted to.
///
/// Sent verbatim as the `type` query parameter of a search request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature films (the default search scope).
    #[default]
    Movie,
    /// TV series.
    Series,
    /// Individual TV episodes.
    Episode,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "series" => Ok(MediaType::Series),
            "episode" => Ok(MediaType::Episode),
            other => Err(ConfigError::UnsupportedMediaType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!(" series ".parse::<MediaType>().unwrap(), MediaType::Series);
        assert!(matches!(
            "game".parse::<MediaType>(),
            Err(ConfigError::UnsupportedMediaType(v)) if v == "game"
        ));
    }
}
