#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod http_handler;
mod reports;
mod util;

use crate::http_handler::http_client::{ApiEndpoints, HTTPClient};
use crate::reports::{
    ReportError, count_launches, launches_and_payloads_per_year, top_rockets, total_payload_mass,
};
use std::fmt::Display;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let client = HTTPClient::new(ApiEndpoints::from_env());
    info!("Fetching the SpaceX collections and computing launch statistics!");

    let (tally, ranking, yearly, masses) = tokio::join!(
        count_launches(&client),
        top_rockets(&client),
        launches_and_payloads_per_year(&client),
        total_payload_mass(&client)
    );

    let mut ok = true;
    match tally {
        Ok(outcomes) => report!("Launch outcomes: {outcomes}"),
        Err(e) => {
            error!("Launch outcome report failed: {e}");
            ok = false;
        }
    }
    ok &= print_report("Top rockets by launch count", ranking);
    ok &= print_report("Launches and payloads per year", yearly);
    ok &= print_report("Total payload mass per rocket", masses);

    if !ok {
        std::process::exit(1);
    }
}

/// Prints a multi-row report under its label, or the error that stopped it.
/// Returns whether the report succeeded.
fn print_report<T: Display>(label: &str, outcome: Result<Vec<T>, ReportError>) -> bool {
    match outcome {
        Ok(rows) => {
            report!("{label}:");
            for row in &rows {
                report!("  {row}");
            }
            true
        }
        Err(e) => {
            error!("{label} failed: {e}");
            false
        }
    }
}
