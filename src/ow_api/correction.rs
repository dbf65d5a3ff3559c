use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::model::{Platform, PlayerRecord};
use crate::ow_api::{profile, search};

/// Search terms to try, in order. On PC the full battletag comes first, then
/// the bare name without its `#1234` discriminator.
pub(crate) fn candidate_terms(identifier: &str, platform: Platform) -> Vec<&str> {
    match identifier.split_once('#') {
        Some((name, _)) if platform.has_discriminator() && !name.is_empty() => {
            vec![identifier, name]
        }
        _ => vec![identifier],
    }
}

/// Resolve a misspelled identifier through the name search.
///
/// Each term must match exactly one profile on `platform`; that profile is then
/// looked up once. Returns `None` when no term leads to a successful lookup.
#[instrument(skip(client, config))]
pub(crate) async fn correct(
    client: &reqwest::Client,
    config: &ClientConfig,
    identifier: &str,
    platform: Platform,
) -> Option<PlayerRecord> {
    let identifier = identifier.trim();
    for term in candidate_terms(identifier, platform) {
        let entries = match search::search(client, config, term).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!(term, error = %e, "name search failed");
                continue;
            }
        };

        let entry = match entries
            .into_iter()
            .filter(|entry| entry.is_on(platform))
            .exactly_one()
        {
            Ok(entry) => entry,
            Err(others) => {
                let matches = others.count();
                debug!(term, matches, "no unique match");
                continue;
            }
        };

        let record = profile::fetch_profile(client, config, &entry.name, platform).await;
        if record.success() {
            debug!(corrected = %record.player_name, "corrected player name");
            return Some(PlayerRecord {
                original_name: Some(identifier.to_string()),
                ..record
            });
        }
        debug!(term, candidate = %entry.name, "lookup of corrected name failed");
    }

    None
}
