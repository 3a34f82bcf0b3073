use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_client::Collection;
use crate::http_handler::http_response::payloads::PayloadsResponse;

#[derive(Debug)]
pub struct PayloadsRequest {}

impl NoBodyHTTPRequestType for PayloadsRequest {}

impl HTTPRequestType for PayloadsRequest {
    type Response = PayloadsResponse;
    fn collection(&self) -> Collection { Collection::Payloads }
}
