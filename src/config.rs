use std::env;
use std::time::Duration;

use tracing::warn;

use crate::model::Region;

pub const DEFAULT_STATS_URL: &str = "https://ow-api.com/v1";
pub const DEFAULT_SEARCH_URL: &str = "https://playoverwatch.com/en-us";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and request settings used by [`OwClient`](crate::OwClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base of the stats endpoint; `/stats/{platform}/{region}/{tag}/profile` is appended.
    pub stats_base_url: String,
    /// Base of the name search endpoint; `/search/account-by-name/{term}` is appended.
    pub search_base_url: String,
    pub region: Region,
    /// Applied to every request. A request that runs out of time yields a failed record.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stats_base_url: DEFAULT_STATS_URL.to_string(),
            search_base_url: DEFAULT_SEARCH_URL.to_string(),
            region: Region::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `OWAPI_STATS_URL`, `OWAPI_SEARCH_URL`,
    /// `OWAPI_REGION` and `OWAPI_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `var`.
    /// Values that fail to parse are logged and ignored.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = var("OWAPI_STATS_URL") {
            config.stats_base_url = url;
        }
        if let Some(url) = var("OWAPI_SEARCH_URL") {
            config.search_base_url = url;
        }
        if let Some(region) = var("OWAPI_REGION") {
            match region.parse::<Region>() {
                Ok(region) => config.region = region,
                Err(_) => warn!(%region, "ignoring unknown OWAPI_REGION"),
            }
        }
        if let Some(secs) = var("OWAPI_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(parsed) if parsed > 0 => config.timeout = Duration::from_secs(parsed),
                _ => warn!(%secs, "ignoring invalid OWAPI_TIMEOUT_SECS"),
            }
        }

        config
    }
}
