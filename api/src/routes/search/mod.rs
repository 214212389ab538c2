pub mod search_api_route;
pub mod search_page_route;
pub mod search_request;
pub mod search_response;
