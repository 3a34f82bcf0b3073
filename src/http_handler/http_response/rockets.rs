use super::response_common::{HTTPResponseType, JSONBodyHTTPResponseType, ResponseError};
use crate::http_handler::common::Rocket;

/// Response type for the rockets collection endpoint
pub struct RocketsResponse {}

impl JSONBodyHTTPResponseType for RocketsResponse {}

impl HTTPResponseType for RocketsResponse {
    type ParsedResponseType = Vec<Rocket>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp).await
    }
}
