//! Thin client for the OMDb HTTP API.
//!
//! Both operations hit the same endpoint and differ only by query parameters:
//! - search: `GET {endpoint}/?apikey=..&s={query}&type={media type}`
//! - lookup: `GET {endpoint}/?apikey=..&i={identifier}`
//!
//! OMDb reports logical failures (unknown title, too many results, bad key)
//! as `{"Response":"False","Error":"..."}`, usually with status 200. Those map
//! to [`DirectoryError::Directory`]; everything on the transport side maps to
//! the remaining variants.
//!
//! # Examples
//!
//! ```no_run
//! use movie_directory::{DirectoryConfig, MovieDirectory, OmdbService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = OmdbService::new(DirectoryConfig::new("https://www.omdbapi.com", "my-key"))?;
//!
//! for item in svc.search("batman").await? {
//!     println!("{} ({}) -> {}", item.title, item.year, item.identifier);
//! }
//!
//! let detail = svc.lookup("tt0133093").await?;
//! println!("{}: {}", detail.title, detail.plot);
//! # Ok(()) }
//! ```

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::{
    MovieDirectory,
    config::directory_config::DirectoryConfig,
    error_handler::{DirectoryError, Result, make_snippet, validate_http_endpoint},
    models::{MovieDetail, SearchEnvelope, SearchResultItem},
};

/// Reusable OMDb client.
///
/// Holds one pooled `reqwest::Client` configured with the request timeout
/// from [`DirectoryConfig`]. Cheap to share behind an `Arc`.
pub struct OmdbService {
    client: reqwest::Client,
    cfg: DirectoryConfig,
    base_url: String,
}

impl OmdbService {
    /// Creates a new [`OmdbService`] from the given config.
    ///
    /// # Errors
    /// - [`DirectoryError::Config`] if `cfg.endpoint` is not http/https
    /// - [`DirectoryError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: DirectoryConfig) -> Result<Self> {
        validate_http_endpoint("OMDB_URL", &cfg.endpoint)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent("movie-search/0.1")
            .build()
            .map_err(DirectoryError::Transport)?;

        let base_url = format!("{}/", cfg.endpoint.trim().trim_end_matches('/'));

        debug!(endpoint = %base_url, media_type = %cfg.media_type, "OmdbService initialized");

        Ok(Self {
            client,
            cfg,
            base_url,
        })
    }

    /// Base URL requests are sent to (never contains the API key).
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET with the API key plus `params` and returns the raw body.
    async fn get_body(&self, params: &[(&str, &str)]) -> Result<String> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.cfg.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            // OMDb answers a bad key with 401 and an `Error` body; keep the
            // status so it is treated as a transport-class failure.
            return Err(DirectoryError::HttpStatus {
                status,
                url: self.base_url.clone(),
                snippet: make_snippet(&body),
            });
        }

        Ok(body)
    }

    fn map_transport(&self, e: reqwest::Error) -> DirectoryError {
        if e.is_timeout() {
            DirectoryError::Timeout(Duration::from_secs(self.cfg.timeout_secs))
        } else {
            // The request URL carries the API key.
            DirectoryError::Transport(e.without_url())
        }
    }
}

impl MovieDirectory for OmdbService {
    #[instrument(name = "omdb_search", skip(self), fields(media_type = %self.cfg.media_type))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        let body = self
            .get_body(&[("s", query), ("type", self.cfg.media_type.as_str())])
            .await?;

        let result = decode_search(&body);
        match &result {
            Ok(items) => debug!(hits = items.len(), "search decoded"),
            Err(err) => warn!(error = %err, "search failed"),
        }
        result
    }

    #[instrument(name = "omdb_lookup", skip(self))]
    async fn lookup(&self, identifier: &str) -> Result<MovieDetail> {
        let body = self.get_body(&[("i", identifier)]).await?;

        let result = decode_lookup(&body);
        match &result {
            Ok(detail) => debug!(title = %detail.title, ratings = detail.ratings.len(), "lookup decoded"),
            Err(err) => warn!(error = %err, "lookup failed"),
        }
        result
    }
}

/// Decodes a search body into items, preserving the directory's order.
///
/// A body carrying `Error` becomes [`DirectoryError::Directory`]; a body with
/// neither `Search` nor `Error` is an empty result set.
pub fn decode_search(body: &str) -> Result<Vec<SearchResultItem>> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

    if let Some(message) = envelope.error {
        return Err(DirectoryError::Directory(message));
    }

    Ok(envelope.search.unwrap_or_default())
}

/// Decodes a lookup body into a [`MovieDetail`].
pub fn decode_lookup(body: &str) -> Result<MovieDetail> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

    if let Some(message) = value.get("Error").and_then(serde_json::Value::as_str) {
        return Err(DirectoryError::Directory(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| DirectoryError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_keeps_directory_order() {
        let body = r#"{
            "Search": [
                {"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Type":"movie","Poster":"https://img/1.jpg"},
                {"Title":"Batman","Year":"1989","imdbID":"tt0096895","Type":"movie","Poster":"N/A"}
            ],
            "totalResults":"2",
            "Response":"True"
        }"#;

        let items = decode_search(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].identifier, "tt0372784");
        assert_eq!(items[0].title, "Batman Begins");
        assert_eq!(items[1].identifier, "tt0096895");
        assert_eq!(items[1].poster_url, "N/A");
    }

    #[test]
    fn search_error_payload_is_a_directory_error() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        match decode_search(body) {
            Err(DirectoryError::Directory(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn search_without_results_or_error_is_empty() {
        assert!(decode_search(r#"{"Response":"True"}"#).unwrap().is_empty());
    }

    #[test]
    fn lookup_body_decodes_all_fields() {
        let body = r#"{
            "Title":"The Matrix","Year":"1999","Poster":"https://img/matrix.jpg",
            "Plot":"A computer hacker learns about the true nature of reality.",
            "Actors":"Keanu Reeves, Laurence Fishburne",
            "Ratings":[
                {"Source":"Internet Movie Database","Value":"8.7/10"},
                {"Source":"Rotten Tomatoes","Value":"83%"},
                {"Source":"Rotten Tomatoes","Value":"83%"}
            ],
            "imdbID":"tt0133093","Response":"True"
        }"#;

        let detail = decode_lookup(body).unwrap();
        assert_eq!(detail.title, "The Matrix");
        assert_eq!(detail.actors, "Keanu Reeves, Laurence Fishburne");
        // Duplicates and order are kept as supplied.
        assert_eq!(detail.ratings.len(), 3);
        assert_eq!(detail.ratings[0].source, "Internet Movie Database");
        assert_eq!(detail.ratings[2].value, "83%");
    }

    #[test]
    fn lookup_without_ratings_defaults_to_empty() {
        let body = r#"{"Title":"T","Year":"2000","Poster":"p","Plot":"x","Actors":"a"}"#;
        assert!(decode_lookup(body).unwrap().ratings.is_empty());
    }

    #[test]
    fn lookup_error_and_garbage() {
        assert!(matches!(
            decode_lookup(r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#),
            Err(DirectoryError::Directory(m)) if m == "Incorrect IMDb ID."
        ));
        assert!(matches!(decode_lookup("<html>"), Err(DirectoryError::Decode(_))));
        assert!(matches!(decode_lookup(r#"{"Title":"only"}"#), Err(DirectoryError::Decode(_))));
    }

    #[test]
    fn new_rejects_bad_endpoint() {
        let cfg = DirectoryConfig::new("ftp://example.org", "k");
        assert!(matches!(OmdbService::new(cfg), Err(DirectoryError::Config(_))));
    }

    #[test]
    fn endpoint_is_normalised() {
        let svc = OmdbService::new(DirectoryConfig::new("http://127.0.0.1:9000//", "k")).unwrap();
        assert_eq!(svc.endpoint(), "http://127.0.0.1:9000/");
    }
}
