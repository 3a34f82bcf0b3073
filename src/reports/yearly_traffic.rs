use super::{ReportError, fetch_launches, fetch_payloads};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::{Dated, Launch, Payload};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Launch and payload record counts of one UTC calendar year.
#[derive(Debug, Clone, Copy)]
pub struct YearlyTraffic {
    /// UTC calendar year the counts belong to.
    year: i32,
    /// Launches lifting off in that year.
    launches: usize,
    /// Payload records created in that year.
    payloads: usize,
}

impl YearlyTraffic {
    pub fn year(&self) -> i32 { self.year }
    pub fn launches(&self) -> usize { self.launches }
    pub fn payloads(&self) -> usize { self.payloads }
}

impl Display for YearlyTraffic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} launches, {} payloads", self.year, self.launches, self.payloads)
    }
}

/// Buckets dated records by their UTC calendar year.
fn tally_years<T: Dated>(records: &[T]) -> BTreeMap<i32, usize> {
    let mut years = BTreeMap::new();
    for record in records {
        *years.entry(record.year()).or_insert(0) += 1;
    }
    years
}

/// Counts launches and payload records per UTC calendar year.
///
/// Produces one row per year appearing in either collection, the missing
/// side counting 0, rows in ascending year order.
pub(crate) fn tally_per_year(launches: &[Launch], payloads: &[Payload]) -> Vec<YearlyTraffic> {
    let launch_years = tally_years(launches);
    let payload_years = tally_years(payloads);
    launch_years
        .keys()
        .chain(payload_years.keys())
        .copied()
        .sorted()
        .dedup()
        .map(|year| YearlyTraffic {
            year,
            launches: launch_years.get(&year).copied().unwrap_or(0),
            payloads: payload_years.get(&year).copied().unwrap_or(0),
        })
        .collect()
}

/// Fetches the launches and payloads collections and counts both per
/// UTC calendar year.
pub async fn launches_and_payloads_per_year(
    client: &HTTPClient,
) -> Result<Vec<YearlyTraffic>, ReportError> {
    let (launches, payloads) = tokio::join!(fetch_launches(client), fetch_payloads(client));
    Ok(tally_per_year(&launches?, &payloads?))
}
