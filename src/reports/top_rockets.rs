use super::{ReportError, fetch_launches, fetch_rockets, rocket_name};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::{Launch, Rocket};
use crate::util::InsertionMap;
use std::fmt::{Display, Formatter};

/// Maximum number of rockets a ranking contains.
const TOP_ROCKET_COUNT: usize = 5;

/// One row of the rocket ranking.
#[derive(Debug)]
pub struct RocketRanking {
    /// Identifier of the ranked rocket.
    rocket: String,
    /// Display name of the ranked rocket.
    name: String,
    /// Number of launches flown by the rocket.
    launches: usize,
}

impl RocketRanking {
    pub fn rocket(&self) -> &str { &self.rocket }
    pub fn name(&self) -> &str { &self.name }
    pub fn launches(&self) -> usize { self.launches }
}

impl Display for RocketRanking {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {} launches", self.name, self.rocket, self.launches)
    }
}

/// Ranks rockets by the number of launches flown.
///
/// Counts launches per rocket id, sorts by descending count and keeps the
/// first [`TOP_ROCKET_COUNT`] entries. The sort is stable over an
/// insertion-ordered count mapping, so tied rockets stay in the order
/// their ids first appear in the launch collection. Names are resolved
/// for the ranked slice only; a ranked id missing from `rockets` fails
/// with [`ReportError::RocketNotFound`].
pub(crate) fn rank_rockets(
    launches: &[Launch],
    rockets: &[Rocket],
) -> Result<Vec<RocketRanking>, ReportError> {
    let mut counts: InsertionMap<&str, usize> = InsertionMap::new();
    for launch in launches {
        *counts.entry_or_default(launch.rocket()) += 1;
    }
    let mut ranked = counts.into_entries();
    ranked.sort_by(|(_, first), (_, second)| second.cmp(first));
    ranked.truncate(TOP_ROCKET_COUNT);
    ranked
        .into_iter()
        .map(|(rocket, launches)| {
            Ok(RocketRanking {
                rocket: String::from(rocket),
                name: String::from(rocket_name(rockets, rocket)?),
                launches,
            })
        })
        .collect()
}

/// Fetches the launches and rockets collections and ranks rockets by
/// launch count.
pub async fn top_rockets(client: &HTTPClient) -> Result<Vec<RocketRanking>, ReportError> {
    let (launches, rockets) = tokio::join!(fetch_launches(client), fetch_rockets(client));
    rank_rockets(&launches?, &rockets?)
}
