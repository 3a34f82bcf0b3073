use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_client::Collection;
use crate::http_handler::http_response::launches::LaunchesResponse;

/// Request type for the launches collection endpoint.
#[derive(Debug)]
pub struct LaunchesRequest {}

impl NoBodyHTTPRequestType for LaunchesRequest {}

impl HTTPRequestType for LaunchesRequest {
    /// Type of the expected response.
    type Response = LaunchesResponse;
    /// The collection fetched by this request.
    fn collection(&self) -> Collection { Collection::Launches }
}
