//! Addressable views: `/` for search, `/movies/<identifier>` for a detail page.

use std::fmt;

pub const DETAIL_PREFIX: &str = "/movies";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    /// Detail view; the identifier is opaque and may be empty when the URL
    /// carried none.
    Detail(String),
}

impl Route {
    /// Path for this route. Identifiers are percent-encoded as one segment.
    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Detail(id) if id.is_empty() => format!("{DETAIL_PREFIX}/"),
            Route::Detail(id) => format!("{DETAIL_PREFIX}/{}", urlencoding::encode(id)),
        }
    }

    /// Parses a request path (query string ignored). Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == "/" {
            return Some(Route::Search);
        }

        let rest = path.strip_prefix(DETAIL_PREFIX)?;
        if rest.is_empty() {
            return Some(Route::Detail(String::new()));
        }

        let segment = rest.strip_prefix('/')?;
        if segment.contains('/') {
            return None;
        }

        urlencoding::decode(segment)
            .ok()
            .map(|id| Route::Detail(id.into_owned()))
    }

    /// Identifier carried by a detail route, `None` when absent or empty.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Route::Detail(id) if !id.is_empty() => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Search.path(), "/");
        assert_eq!(Route::Detail("tt0133093".into()).path(), "/movies/tt0133093");
        assert_eq!(Route::Detail("a b/c".into()).path(), "/movies/a%20b%2Fc");
        assert_eq!(Route::Detail(String::new()).path(), "/movies/");
    }

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Search));
        assert_eq!(Route::parse("/?q=batman"), Some(Route::Search));
        assert_eq!(
            Route::parse("/movies/tt0133093"),
            Some(Route::Detail("tt0133093".into()))
        );
        assert_eq!(
            Route::parse("/movies/a%20b%2Fc"),
            Some(Route::Detail("a b/c".into()))
        );
        assert_eq!(Route::parse("/movies"), Some(Route::Detail(String::new())));
        assert_eq!(Route::parse("/movies/"), Some(Route::Detail(String::new())));
    }

    #[test]
    fn parse_rejects_other_paths() {
        assert_eq!(Route::parse("/moviesx"), None);
        assert_eq!(Route::parse("/movies/a/b"), None);
        assert_eq!(Route::parse("/about"), None);
    }

    #[test]
    fn identifier_is_none_when_empty() {
        assert_eq!(Route::Detail(String::new()).identifier(), None);
        assert_eq!(Route::Search.identifier(), None);
        assert_eq!(Route::Detail("tt1".into()).identifier(), Some("tt1"));
    }
}
