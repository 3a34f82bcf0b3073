use std::env;
use strum_macros::Display;

/// Default base URL of the public SpaceX v4 API.
const SPACEX_API_BASE: &str = "https://api.spacexdata.com/v4";

/// Environment variable rebasing all collection endpoints onto another host.
const ENV_BASE_URL: &str = "SPACEX_API_BASE_URL";
/// Environment variables overriding a single collection endpoint.
const ENV_LAUNCHES_URL: &str = "SPACEX_LAUNCHES_URL";
const ENV_ROCKETS_URL: &str = "SPACEX_ROCKETS_URL";
const ENV_PAYLOADS_URL: &str = "SPACEX_PAYLOADS_URL";

/// The three record collections served by the API.
#[derive(Debug, Display, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Launches,
    Rockets,
    Payloads,
}

impl Collection {
    fn path(self) -> &'static str {
        match self {
            Collection::Launches => "/launches",
            Collection::Rockets => "/rockets",
            Collection::Payloads => "/payloads",
        }
    }
}

/// Resolved absolute URL per fetchable collection.
///
/// Defaults to the public SpaceX v4 endpoints; the recognized environment
/// variables point single collections (or all of them) at another host,
/// e.g. a local mock server.
#[derive(Debug)]
pub struct ApiEndpoints {
    launches: String,
    rockets: String,
    payloads: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::rebased(SPACEX_API_BASE)
    }
}

impl ApiEndpoints {
    /// Builds the canonical collection URLs below `base`.
    pub(crate) fn rebased(base: &str) -> Self {
        let trimmed = base.trim_end_matches('/');
        Self {
            launches: format!("{trimmed}{}", Collection::Launches.path()),
            rockets: format!("{trimmed}{}", Collection::Rockets.path()),
            payloads: format!("{trimmed}{}", Collection::Payloads.path()),
        }
    }

    /// Reads the endpoint configuration from the environment.
    ///
    /// `SPACEX_API_BASE_URL` rebases all three collections onto another
    /// host; `SPACEX_LAUNCHES_URL`, `SPACEX_ROCKETS_URL` and
    /// `SPACEX_PAYLOADS_URL` override single endpoints. Unset variables
    /// fall back to the public API.
    pub fn from_env() -> Self {
        Self::from_overrides(
            env::var(ENV_BASE_URL).ok(),
            env::var(ENV_LAUNCHES_URL).ok(),
            env::var(ENV_ROCKETS_URL).ok(),
            env::var(ENV_PAYLOADS_URL).ok(),
        )
    }

    /// Applies the recognized endpoint overrides. Per-collection URLs win
    /// over a rebased base URL.
    pub(crate) fn from_overrides(
        base: Option<String>,
        launches: Option<String>,
        rockets: Option<String>,
        payloads: Option<String>,
    ) -> Self {
        let mut endpoints = base.map_or_else(Self::default, |url| Self::rebased(&url));
        if let Some(url) = launches {
            endpoints.launches = url;
        }
        if let Some(url) = rockets {
            endpoints.rockets = url;
        }
        if let Some(url) = payloads {
            endpoints.payloads = url;
        }
        endpoints
    }

    /// Returns the absolute URL of `collection`.
    pub(crate) fn url_for(&self, collection: Collection) -> &str {
        match collection {
            Collection::Launches => &self.launches,
            Collection::Rockets => &self.rockets,
            Collection::Payloads => &self.payloads,
        }
    }
}

/// A simple wrapper around `reqwest::Client` used to manage the collection
/// fetches with preconfigured endpoint URLs and default settings.
///
/// One instance is shared by all report computations; it carries no state
/// beyond the connection pool and the resolved endpoint URLs.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Absolute URL per fetchable collection.
    endpoints: ApiEndpoints,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` serving the given collection endpoints.
    ///
    /// This client has a default request timeout of 30 seconds.
    pub(crate) fn new(endpoints: ApiEndpoints) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap(),
            endpoints,
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the absolute URL the given collection is fetched from.
    pub(crate) fn url_for(&self, collection: Collection) -> &str {
        self.endpoints.url_for(collection)
    }
}
