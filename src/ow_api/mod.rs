pub(crate) mod correction;
pub(crate) mod profile;
pub(crate) mod search;

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{OwError, Result};

/// Fetch a URL and parse the response body as JSON.
///
/// A JSON object with an `error` key is returned as [`OwError::Api`] whatever
/// the status code. A non-success status without such a payload is
/// [`OwError::UnexpectedStatus`].
pub(crate) async fn get_json(
    client: &reqwest::Client,
    url: &Url,
    timeout: Duration,
) -> Result<Value> {
    debug!(url = url.as_str(), "fetching json");

    let response = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| OwError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| OwError::ResponseBody {
        url: url.to_string(),
        source: e,
    })?;

    let value = match serde_json::from_str::<Value>(&body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(OwError::UnexpectedStatus {
                url: url.to_string(),
                status,
            })
        }
        Err(source) => {
            return Err(OwError::Json {
                url: url.to_string(),
                source,
            })
        }
    };

    if let Some(message) = error_message(&value) {
        return Err(OwError::Api {
            url: url.to_string(),
            message,
        });
    }

    if !status.is_success() {
        return Err(OwError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(value)
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Append percent-encoded path segments to a base URL.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|source| OwError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    url.path_segments_mut()
        .map_err(|_| OwError::BaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
