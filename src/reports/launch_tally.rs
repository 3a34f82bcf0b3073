use super::{ReportError, fetch_launches};
use crate::http_handler::Launch;
use crate::http_handler::http_client::HTTPClient;
use std::fmt::{Display, Formatter};

/// Launch counts partitioned by recorded outcome.
#[derive(Debug, Clone, Copy)]
pub struct LaunchTally {
    successful: usize,
    unsuccessful: usize,
}

impl LaunchTally {
    pub fn successful(&self) -> usize { self.successful }
    pub fn unsuccessful(&self) -> usize { self.unsuccessful }
}

impl Display for LaunchTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} successful, {} unsuccessful", self.successful, self.unsuccessful)
    }
}

/// Partitions launches by their tri-state outcome flag. Launches without
/// a recorded outcome count as neither successful nor unsuccessful.
pub(crate) fn tally_outcomes(launches: &[Launch]) -> LaunchTally {
    LaunchTally {
        successful: launches.iter().filter(|launch| launch.success() == Some(true)).count(),
        unsuccessful: launches.iter().filter(|launch| launch.success() == Some(false)).count(),
    }
}

/// Fetches the launches collection and tallies launch outcomes.
pub async fn count_launches(client: &HTTPClient) -> Result<LaunchTally, ReportError> {
    Ok(tally_outcomes(&fetch_launches(client).await?))
}
