use super::{ReportError, fetch_launches, fetch_payloads, fetch_rockets, rocket_name};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::{Launch, Payload, Rocket};
use crate::util::InsertionMap;
use std::fmt::{Display, Formatter};

/// Accumulated payload mass of one rocket.
#[derive(Debug)]
pub struct RocketMass {
    /// Identifier of the rocket.
    rocket: String,
    /// Display name of the rocket.
    name: String,
    /// Summed payload mass in kilograms.
    total_mass_kg: f64,
}

impl RocketMass {
    pub fn rocket(&self) -> &str { &self.rocket }
    pub fn name(&self) -> &str { &self.name }
    pub fn total_mass_kg(&self) -> f64 { self.total_mass_kg }
}

impl Display for RocketMass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {} kg", self.name, self.rocket, self.total_mass_kg)
    }
}

/// Sums payload mass per rocket over all launches.
///
/// Only the first payload id of each launch is considered; further ids of
/// a multi-payload launch are ignored. A launch contributes when its
/// rocket id and its first payload id both resolve and the payload has a
/// published mass. Anything else contributes nothing and creates no row.
/// Rows keep the order in which rockets first contributed.
pub(crate) fn accumulate_mass(
    launches: &[Launch],
    rockets: &[Rocket],
    payloads: &[Payload],
) -> Result<Vec<RocketMass>, ReportError> {
    let mut totals: InsertionMap<&str, f64> = InsertionMap::new();
    for launch in launches {
        let flown_rocket = rockets.iter().find(|rocket| rocket.id() == launch.rocket());
        let first_payload = launch
            .payloads()
            .first()
            .and_then(|first| payloads.iter().find(|payload| payload.id() == first));
        if let (Some(rocket), Some(payload)) = (flown_rocket, first_payload) {
            if let Some(mass_kg) = payload.mass_kg() {
                *totals.entry_or_default(rocket.id()) += mass_kg;
            }
        }
    }
    totals
        .into_entries()
        .into_iter()
        .map(|(rocket, total_mass_kg)| {
            Ok(RocketMass {
                rocket: String::from(rocket),
                name: String::from(rocket_name(rockets, rocket)?),
                total_mass_kg,
            })
        })
        .collect()
}

/// Fetches all three collections and sums payload mass per rocket.
pub async fn total_payload_mass(client: &HTTPClient) -> Result<Vec<RocketMass>, ReportError> {
    let (launches, rockets, payloads) =
        tokio::join!(fetch_launches(client), fetch_rockets(client), fetch_payloads(client));
    accumulate_mass(&launches?, &rockets?, &payloads?)
}
