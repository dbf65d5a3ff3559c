use futures_util::future::join_all;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{OwError, Result};
use crate::model::{
    Awards, Games, LookupFailure, ModeStats, Platform, PlayerRecord, PlayerStats, PlayerStatus,
    Rank, Role, RoleRating, RoleRatings,
};
use crate::ow_api::{self, correction};

/// Look up one player, optionally falling back to a name correction when the
/// identifier was not found. Never fails: problems end up in the record.
#[instrument(skip(client, config))]
pub(crate) async fn lookup(
    client: &reqwest::Client,
    config: &ClientConfig,
    identifier: &str,
    platform: Platform,
    attempt_correction: bool,
) -> PlayerRecord {
    let identifier = identifier.trim();
    let record = fetch_profile(client, config, identifier, platform).await;

    let correctable = record
        .failure()
        .is_some_and(LookupFailure::is_correctable);
    if !attempt_correction || !correctable {
        return record;
    }

    correction::correct(client, config, identifier, platform)
        .await
        .unwrap_or(record)
}

/// Look up every identifier concurrently. The output has the input's order.
#[instrument(skip(client, config, identifiers), fields(count = identifiers.len()))]
pub(crate) async fn lookup_many<S: AsRef<str>>(
    client: &reqwest::Client,
    config: &ClientConfig,
    identifiers: &[S],
    platform: Platform,
    attempt_correction: bool,
) -> Vec<PlayerRecord> {
    let records = join_all(identifiers.iter().map(|identifier| {
        lookup(
            client,
            config,
            identifier.as_ref(),
            platform,
            attempt_correction,
        )
    }))
    .await;
    debug!(
        succeeded = records.iter().filter(|r| r.success()).count(),
        "finished batch lookup"
    );
    records
}

/// One request against the stats endpoint, without any correction.
pub(crate) async fn fetch_profile(
    client: &reqwest::Client,
    config: &ClientConfig,
    identifier: &str,
    platform: Platform,
) -> PlayerRecord {
    let identifier = identifier.trim();
    match get_profile(client, config, identifier, platform).await {
        Ok(status) => PlayerRecord {
            player_name: identifier.to_string(),
            original_name: None,
            platform,
            status,
        },
        Err(e) => {
            debug!(identifier, %platform, error = %e, "profile lookup failed");
            PlayerRecord::failed(identifier, platform, e.into())
        }
    }
}

async fn get_profile(
    client: &reqwest::Client,
    config: &ClientConfig,
    identifier: &str,
    platform: Platform,
) -> Result<PlayerStatus> {
    let url = profile_url(config, identifier, platform)?;
    let value = ow_api::get_json(client, &url, config.timeout).await?;
    let profile: ProfileResponse =
        serde_json::from_value(value).map_err(|source| OwError::Json {
            url: url.to_string(),
            source,
        })?;
    profile.into_status(url.as_str())
}

/// `{stats}/stats/{platform}/{region}/{tag}/profile`, with `#` in the tag replaced by `-`.
pub(crate) fn profile_url(
    config: &ClientConfig,
    identifier: &str,
    platform: Platform,
) -> Result<Url> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(OwError::EmptyIdentifier);
    }
    let tag = identifier.replace('#', "-");
    let platform = platform.to_string();
    let region = config.region.to_string();
    ow_api::endpoint(
        &config.stats_base_url,
        &["stats", platform.as_str(), region.as_str(), tag.as_str(), "profile"],
    )
}

impl From<OwError> for LookupFailure {
    fn from(err: OwError) -> Self {
        match err {
            e if e.is_timeout() => LookupFailure::Timeout,
            OwError::Api { message, .. } => LookupFailure::NotFound { message },
            OwError::UnexpectedStatus { status, .. } => LookupFailure::UnexpectedStatus {
                status: status.as_u16(),
            },
            OwError::EmptyIdentifier | OwError::InvalidUrl { .. } | OwError::BaseUrl { .. } => {
                LookupFailure::InvalidIdentifier
            }
            e @ (OwError::Http { .. } | OwError::ResponseBody { .. }) => {
                LookupFailure::Transport {
                    message: e.to_string(),
                }
            }
            e => LookupFailure::Malformed {
                message: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    private: bool,
    level: Option<u32>,
    prestige: Option<u32>,
    endorsement: Option<u32>,
    icon: Option<String>,
    competitive_stats: Option<ModeStatsResponse>,
    quick_play_stats: Option<ModeStatsResponse>,
    /// Kept raw so one odd entry only drops that rating.
    ratings: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ModeStatsResponse {
    awards: Option<AwardsResponse>,
    games: Option<GamesResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwardsResponse {
    cards: Option<u32>,
    medals: Option<u32>,
    medals_bronze: Option<u32>,
    medals_silver: Option<u32>,
    medals_gold: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GamesResponse {
    won: Option<u32>,
    played: Option<u32>,
}

/// Older API versions report `level`, newer ones `group` and `tier`.
#[derive(Debug, Deserialize)]
struct RatingResponse {
    role: String,
    level: Option<u32>,
    group: Option<String>,
    tier: Option<u8>,
}

impl ProfileResponse {
    fn into_status(self, url: &str) -> Result<PlayerStatus> {
        if self.private {
            return Ok(PlayerStatus::Private);
        }

        let missing = |field| OwError::MissingField {
            url: url.to_string(),
            field,
        };
        let stats = PlayerStats {
            level: self.level.ok_or_else(|| missing("level"))?,
            prestige: self.prestige.ok_or_else(|| missing("prestige"))?,
            endorsement: self.endorsement.ok_or_else(|| missing("endorsement"))?,
            icon: self.icon,
            competitive: self.competitive_stats.and_then(ModeStatsResponse::into_mode),
            quickplay: self.quick_play_stats.and_then(ModeStatsResponse::into_mode),
            ratings: parse_ratings(self.ratings.unwrap_or_default()),
        };
        Ok(PlayerStatus::Public(Box::new(stats)))
    }
}

impl ModeStatsResponse {
    /// `None` unless every award and the win count are present.
    fn into_mode(self) -> Option<ModeStats> {
        let awards = self.awards?;
        let games = self.games?;
        Some(ModeStats {
            awards: Awards {
                cards: awards.cards?,
                medals: awards.medals?,
                medals_bronze: awards.medals_bronze?,
                medals_silver: awards.medals_silver?,
                medals_gold: awards.medals_gold?,
            },
            games: Games {
                won: games.won?,
                played: games.played,
            },
        })
    }
}

fn parse_ratings(ratings: Vec<Value>) -> RoleRatings {
    let mut parsed = RoleRatings::default();
    for rating in ratings {
        let rating = match serde_json::from_value::<RatingResponse>(rating) {
            Ok(rating) => rating,
            Err(e) => {
                warn!(error = %e, "skipping unparsable rating");
                continue;
            }
        };
        let Ok(role) = rating.role.parse::<Role>() else {
            debug!(role = %rating.role, "skipping rating for unknown role");
            continue;
        };
        let value = match (rating.group, rating.tier, rating.level) {
            (Some(group), Some(tier), _) => match Rank::from_group(&group, tier) {
                Ok(rank) => RoleRating::Ranked(rank),
                Err(e) => {
                    warn!(%role, error = %e, "skipping unparsable rank");
                    continue;
                }
            },
            (_, _, Some(level)) => RoleRating::SkillRating(level),
            _ => {
                debug!(%role, "skipping rating without a value");
                continue;
            }
        };
        parsed.set(role, value);
    }
    parsed
}
