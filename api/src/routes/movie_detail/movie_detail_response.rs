use movie_directory::MovieDetail;
use screens::ScreenState;
use serde::Serialize;

/// Payload of a successful `/api/movies/{id}`.
#[derive(Debug, Serialize)]
pub struct MovieDetailApiResponse {
    pub identifier: String,
    pub state: ScreenState<MovieDetail>,
}
