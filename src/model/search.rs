use serde::{Deserialize, Serialize};

use crate::model::Platform;

/// A profile returned by the name search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Canonical identifier, e.g. `Jayne#1447` on PC.
    #[serde(alias = "battleTag")]
    pub name: String,
    /// Platform as the API names it; see [`SearchEntry::platform`].
    #[serde(rename = "platform")]
    pub platform_name: String,
    #[serde(default)]
    pub url_name: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub portrait: Option<String>,
}

impl SearchEntry {
    /// The entry's platform, or `None` for platforms this crate does not know.
    pub fn platform(&self) -> Option<Platform> {
        self.platform_name.parse().ok()
    }

    pub fn is_on(&self, platform: Platform) -> bool {
        self.platform() == Some(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_both_name_fields() {
        let entries: Vec<SearchEntry> = serde_json::from_str(
            r#"[
                {"platform": "pc", "name": "Jayne#1447", "urlName": "Jayne-1447", "level": 512, "isPublic": true},
                {"platform": "psn", "battleTag": "jayne_ps"},
                {"platform": "stadia", "name": "jayne"}
            ]"#,
        )
        .unwrap();

        assert_eq!(entries[0].name, "Jayne#1447");
        assert_eq!(entries[0].url_name.as_deref(), Some("Jayne-1447"));
        assert!(entries[0].is_on(Platform::Pc));
        assert_eq!(entries[1].name, "jayne_ps");
        assert_eq!(entries[1].platform(), Some(Platform::PlayStation));
        assert_eq!(entries[1].level, None);
        assert_eq!(entries[2].platform(), None);
    }
}
