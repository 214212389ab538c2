//! Directory records and raw response envelopes.
//!
//! Field names on the wire follow the directory's PascalCase JSON
//! (`imdbID`, `Title`, `Ratings[].Source`, ...). The public records expose
//! them under snake_case names and serialize that way for the JSON API.

use serde::{Deserialize, Serialize};

/// One entry of a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(rename(deserialize = "imdbID"))]
    pub identifier: String,
    #[serde(rename(deserialize = "Title"))]
    pub title: String,
    #[serde(rename(deserialize = "Year"))]
    pub year: String,
    #[serde(rename(deserialize = "Poster"))]
    pub poster_url: String,
}

/// A `(source, value)` rating pair, kept exactly as the directory supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename(deserialize = "Source"))]
    pub source: String,
    #[serde(rename(deserialize = "Value"))]
    pub value: String,
}

/// Full record for a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename(deserialize = "Title"))]
    pub title: String,
    #[serde(rename(deserialize = "Year"))]
    pub year: String,
    #[serde(rename(deserialize = "Poster"))]
    pub poster_url: String,
    #[serde(rename(deserialize = "Plot"))]
    pub plot: String,
    #[serde(rename(deserialize = "Actors"))]
    pub actors: String,
    #[serde(rename(deserialize = "Ratings"), default)]
    pub ratings: Vec<Rating>,
}

/// Raw search body: either `{"Search": [...]}` or `{"Error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<SearchResultItem>>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

