use movie_directory::SearchResultItem;
use screens::ScreenState;
use serde::Serialize;

/// Payload of a successful `/api/search`.
#[derive(Debug, Serialize)]
pub struct SearchApiResponse {
    pub query: String,
    /// Search screen state; `loaded` with results in directory order.
    pub state: ScreenState<Vec<SearchResultItem>>,
    /// Detail page path for each result, index-aligned with the results.
    pub links: Vec<String>,
}
