use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::*;
use crate::ow_api;

/// The main entry point for fetching Overwatch player statistics.
///
/// `OwClient` wraps a [`reqwest::Client`] and a [`ClientConfig`]. Lookups never
/// return an error: timeouts, unknown players and broken responses all come
/// back as a [`PlayerRecord`] with a [`PlayerStatus::Failed`] status.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use owapi::{OwClient, Platform};
///
/// let client = OwClient::new();
/// let player = client.get_player("Jayne#1447", Platform::Pc, true).await;
/// if let Some(level) = player.actual_level() {
///     println!("{} is level {level}", player.player_name);
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OwClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl OwClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_config(client, ClientConfig::default())
    }

    /// Create a new client with custom endpoints, region or timeout.
    pub fn with_config(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one player's profile.
    ///
    /// With `correct` set, an identifier the API does not know is resolved
    /// through the name search; a corrected record keeps the supplied
    /// identifier in [`PlayerRecord::original_name`].
    #[instrument(skip(self))]
    pub async fn get_player(
        &self,
        identifier: &str,
        platform: Platform,
        correct: bool,
    ) -> PlayerRecord {
        ow_api::profile::lookup(&self.http, &self.config, identifier, platform, correct).await
    }

    /// Fetch many players concurrently. Records come back in the order of `identifiers`.
    #[instrument(skip(self, identifiers), fields(count = identifiers.len()))]
    pub async fn get_players<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        platform: Platform,
        correct: bool,
    ) -> Vec<PlayerRecord> {
        ow_api::profile::lookup_many(&self.http, &self.config, identifiers, platform, correct)
            .await
    }

    /// Run only the name correction for `identifier`.
    #[instrument(skip(self))]
    pub async fn correct_player(
        &self,
        identifier: &str,
        platform: Platform,
    ) -> Option<PlayerRecord> {
        ow_api::correction::correct(&self.http, &self.config, identifier, platform).await
    }

    /// Search profiles by name, optionally keeping only one platform.
    #[instrument(skip(self))]
    pub async fn search_players(
        &self,
        term: &str,
        platform: Option<Platform>,
    ) -> Result<Vec<SearchEntry>> {
        let entries = ow_api::search::search(&self.http, &self.config, term).await?;
        Ok(match platform {
            Some(platform) => entries.into_iter().filter(|e| e.is_on(platform)).collect(),
            None => entries,
        })
    }
}
