use super::response_common::{HTTPResponseType, JSONBodyHTTPResponseType, ResponseError};
use crate::http_handler::common::Launch;

/// Response type for the launches collection endpoint
pub struct LaunchesResponse {}

impl JSONBodyHTTPResponseType for LaunchesResponse {}

impl HTTPResponseType for LaunchesResponse {
    /// Type of the parsed response, the full launch collection
    type ParsedResponseType = Vec<Launch>;

    /// Reads and parses the response json body
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp).await
    }
}
