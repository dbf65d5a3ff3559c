use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{OwError, Result};
use crate::model::SearchEntry;
use crate::ow_api;

/// Query the name search endpoint. Entries from every platform are returned.
#[instrument(skip(client, config))]
pub(crate) async fn search(
    client: &reqwest::Client,
    config: &ClientConfig,
    term: &str,
) -> Result<Vec<SearchEntry>> {
    if term.trim().is_empty() {
        return Err(OwError::EmptyIdentifier);
    }
    let url = ow_api::endpoint(
        &config.search_base_url,
        &["search", "account-by-name", term],
    )?;
    let value = ow_api::get_json(client, &url, config.timeout).await?;
    let entries: Vec<SearchEntry> =
        serde_json::from_value(value).map_err(|source| OwError::Json {
            url: url.to_string(),
            source,
        })?;
    debug!(count = entries.len(), "parsed search results");
    Ok(entries)
}
