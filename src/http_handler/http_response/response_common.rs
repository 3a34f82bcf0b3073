use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    fn unwrap_return_code(response: reqwest::Response) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ResponseError::Status(response.status().as_u16()))
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "no connection to the endpoint")]
    NoConnection,
    #[strum(to_string = "endpoint returned status code {0}")]
    Status(u16),
    #[strum(to_string = "malformed response body: {0}")]
    Decode(String),
    #[strum(to_string = "unclassified transport error")]
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Decode(value.to_string())
        } else if value.is_connect() || value.is_timeout() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
