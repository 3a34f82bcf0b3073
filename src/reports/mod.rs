//! Aggregate reports over the SpaceX API collections.
//!
//! Each report is an independent operation: it fetches the collections it
//! needs through the shared [`HTTPClient`] and reduces them to a printable
//! summary. A failure stays local to the report that hit it.

mod launch_tally;
mod payload_mass;
mod top_rockets;
mod yearly_traffic;

pub use launch_tally::count_launches;
pub use payload_mass::total_payload_mass;
pub use top_rockets::top_rockets;
pub use yearly_traffic::launches_and_payloads_per_year;

use crate::http_handler::http_client::{Collection, HTTPClient};
use crate::http_handler::http_request::launches_get::LaunchesRequest;
use crate::http_handler::http_request::payloads_get::PayloadsRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_request::rockets_get::RocketsRequest;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::{Launch, Payload, Rocket};
use strum_macros::Display;

/// Errors occurring while computing a report.
#[derive(Debug, Display)]
pub enum ReportError {
    /// Fetching one of the collections failed.
    #[strum(to_string = "fetching the {collection} collection failed: {source}")]
    Fetch {
        collection: Collection,
        source: ResponseError,
    },
    /// A launch references a rocket id missing from the rockets collection.
    #[strum(to_string = "a launch references the unknown rocket id {0}")]
    RocketNotFound(String),
}

impl std::error::Error for ReportError {}

async fn fetch_launches(client: &HTTPClient) -> Result<Vec<Launch>, ReportError> {
    LaunchesRequest {}.send_request(client).await.map_err(|source| ReportError::Fetch {
        collection: Collection::Launches,
        source,
    })
}

async fn fetch_rockets(client: &HTTPClient) -> Result<Vec<Rocket>, ReportError> {
    RocketsRequest {}.send_request(client).await.map_err(|source| ReportError::Fetch {
        collection: Collection::Rockets,
        source,
    })
}

async fn fetch_payloads(client: &HTTPClient) -> Result<Vec<Payload>, ReportError> {
    PayloadsRequest {}.send_request(client).await.map_err(|source| ReportError::Fetch {
        collection: Collection::Payloads,
        source,
    })
}

/// Resolves a rocket id to its display name.
fn rocket_name<'a>(rockets: &'a [Rocket], id: &str) -> Result<&'a str, ReportError> {
    rockets
        .iter()
        .find(|rocket| rocket.id() == id)
        .map(Rocket::name)
        .ok_or_else(|| ReportError::RocketNotFound(String::from(id)))
}
