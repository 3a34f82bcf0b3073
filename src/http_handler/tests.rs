use super::http_client::{ApiEndpoints, Collection, HTTPClient};
use super::http_request::launches_get::LaunchesRequest;
use super::http_request::payloads_get::PayloadsRequest;
use super::http_request::request_common::NoBodyHTTPRequestType;
use super::http_request::rockets_get::RocketsRequest;
use super::http_response::response_common::ResponseError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HTTPClient {
    HTTPClient::new(ApiEndpoints::rebased(&server.uri()))
}

#[tokio::test]
async fn test_launches_fetch_parses_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "l1",
                "success": true,
                "date_utc": "2020-05-30T19:22:00.000Z",
                "rocket": "r1",
                "payloads": ["p1"],
                "flight_number": 94
            },
            {
                "id": "l2",
                "success": null,
                "date_utc": "2021-11-11T00:00:00.000Z",
                "rocket": "r2",
                "payloads": []
            }
        ])))
        .mount(&server)
        .await;

    let launches = LaunchesRequest {}
        .send_request(&client_for(&server))
        .await
        .unwrap();
    assert_eq!(launches.len(), 2);
    assert_eq!(launches[0].id(), "l1");
    assert_eq!(launches[0].success(), Some(true));
    assert_eq!(launches[0].rocket(), "r1");
    assert_eq!(launches[1].success(), None);
    assert!(launches[1].payloads().is_empty());
}

#[tokio::test]
async fn test_rockets_and_payloads_fetch_their_own_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rockets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "r1", "name": "Falcon 9"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payloads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "p1", "created_at": "2020-04-01T00:00:00.000Z", "mass_kg": 12055.0}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (rockets, payloads) = tokio::join!(
        RocketsRequest {}.send_request(&client),
        PayloadsRequest {}.send_request(&client)
    );
    assert_eq!(rockets.unwrap()[0].name(), "Falcon 9");
    assert_eq!(payloads.unwrap()[0].mass_kg(), Some(12055.0));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = LaunchesRequest {}
        .send_request(&client_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(error, ResponseError::Status(500)));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "a collection"})),
        )
        .mount(&server)
        .await;

    let error = LaunchesRequest {}
        .send_request(&client_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(error, ResponseError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_no_connection() {
    // Bind to an ephemeral port and release it again so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HTTPClient::new(ApiEndpoints::rebased(&format!("http://127.0.0.1:{port}")));
    let error = LaunchesRequest {}.send_request(&client).await.unwrap_err();
    assert!(matches!(error, ResponseError::NoConnection));
}

#[test]
fn test_default_endpoints_point_at_public_api() {
    let endpoints = ApiEndpoints::default();
    assert_eq!(
        endpoints.url_for(Collection::Launches),
        "https://api.spacexdata.com/v4/launches"
    );
    assert_eq!(
        endpoints.url_for(Collection::Rockets),
        "https://api.spacexdata.com/v4/rockets"
    );
    assert_eq!(
        endpoints.url_for(Collection::Payloads),
        "https://api.spacexdata.com/v4/payloads"
    );
}

#[test]
fn test_rebased_endpoints_tolerate_trailing_slash() {
    let endpoints = ApiEndpoints::rebased("http://localhost:8080/");
    assert_eq!(
        endpoints.url_for(Collection::Rockets),
        "http://localhost:8080/rockets"
    );
}

#[test]
fn test_collection_overrides_win_over_rebased_base() {
    let endpoints = ApiEndpoints::from_overrides(
        Some(String::from("http://localhost:8080")),
        None,
        Some(String::from("http://fixtures.local/v4/rockets.json")),
        None,
    );
    assert_eq!(
        endpoints.url_for(Collection::Launches),
        "http://localhost:8080/launches"
    );
    assert_eq!(
        endpoints.url_for(Collection::Rockets),
        "http://fixtures.local/v4/rockets.json"
    );
    assert_eq!(
        endpoints.url_for(Collection::Payloads),
        "http://localhost:8080/payloads"
    );
}
