use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_client::Collection;
use crate::http_handler::http_response::rockets::RocketsResponse;

#[derive(Debug)]
pub struct RocketsRequest {}

impl NoBodyHTTPRequestType for RocketsRequest {}

impl HTTPRequestType for RocketsRequest {
    type Response = RocketsResponse;
    fn collection(&self) -> Collection {
        Collection::Rockets
    }
}
