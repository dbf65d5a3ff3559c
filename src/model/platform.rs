use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// The platform a player profile lives on.
///
/// The [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr)
/// forms are the names the API uses in URLs and search results.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[default]
    #[strum(serialize = "pc")]
    #[serde(rename = "pc")]
    Pc,
    #[strum(serialize = "xbl")]
    #[serde(rename = "xbl")]
    Xbox,
    #[strum(serialize = "psn")]
    #[serde(rename = "psn")]
    PlayStation,
    #[strum(serialize = "nintendo-switch")]
    #[serde(rename = "nintendo-switch")]
    Switch,
}

impl Platform {
    /// PC identifiers carry a `#1234` discriminator, console ones do not.
    pub fn has_discriminator(self) -> bool {
        matches!(self, Platform::Pc)
    }
}

/// Server region used by the stats endpoint.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    #[default]
    Eu,
    Asia,
}
