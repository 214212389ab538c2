pub mod movie_detail_api_route;
pub mod movie_detail_page_route;
pub mod movie_detail_response;
