use super::response_common::{HTTPResponseType, JSONBodyHTTPResponseType, ResponseError};
use crate::http_handler::common::Payload;

/// Response type for the payloads collection endpoint
pub struct PayloadsResponse {}

impl JSONBodyHTTPResponseType for PayloadsResponse {}

impl HTTPResponseType for PayloadsResponse {
    type ParsedResponseType = Vec<Payload>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp).await
    }
}
