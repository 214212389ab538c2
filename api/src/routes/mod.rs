pub mod health_route;
pub mod movie_detail;
pub mod search;
