use crate::http_handler::http_client::{Collection, HTTPClient};
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn collection(&self) -> Collection;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = client
            .client()
            .get(client.url_for(self.collection()))
            .headers(self.header_params())
            .send()
            .await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}
