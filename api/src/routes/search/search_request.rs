use serde::Deserialize;

/// Query string of the search page. `q` absent means "nothing submitted yet".
#[derive(Debug, Deserialize)]
pub struct SearchPageParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Query string of `/api/search`; `q` is required but may be empty.
#[derive(Debug, Deserialize)]
pub struct SearchApiParams {
    pub q: String,
}
