use serde::Serialize;

use crate::model::{Platform, RoleRatings};

/// The outcome of looking up one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    /// The identifier this record describes. After a correction this is the
    /// canonical name returned by the search endpoint.
    pub player_name: String,
    /// The identifier the caller supplied, set only when a correction was applied.
    pub original_name: Option<String>,
    pub platform: Platform,
    pub status: PlayerStatus,
}

/// Whether a lookup succeeded and how much of the profile is visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerStatus {
    /// The lookup failed; no statistics are available.
    Failed(LookupFailure),
    /// The profile exists but is private; no statistics are available.
    Private,
    /// The profile is public.
    Public(Box<PlayerStats>),
}

/// Why a lookup produced no profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LookupFailure {
    Timeout,
    /// The API returned an error payload, usually "Player not found".
    NotFound { message: String },
    /// The body was not a profile.
    Malformed { message: String },
    UnexpectedStatus { status: u16 },
    Transport { message: String },
    InvalidIdentifier,
}

impl LookupFailure {
    /// Only failures that may come from a misspelled identifier are worth a name search.
    pub fn is_correctable(&self) -> bool {
        matches!(
            self,
            LookupFailure::NotFound { .. } | LookupFailure::Malformed { .. }
        )
    }
}

/// Statistics of a public profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub level: u32,
    pub prestige: u32,
    pub endorsement: u32,
    pub icon: Option<String>,
    pub competitive: Option<ModeStats>,
    pub quickplay: Option<ModeStats>,
    pub ratings: RoleRatings,
}

impl PlayerStats {
    /// The level including prestige, as shown in game.
    pub fn actual_level(&self) -> u64 {
        u64::from(self.prestige) * 100 + u64::from(self.level)
    }
}

/// Awards and game counts for one game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeStats {
    pub awards: Awards,
    pub games: Games,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Awards {
    pub cards: u32,
    pub medals: u32,
    pub medals_bronze: u32,
    pub medals_silver: u32,
    pub medals_gold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Games {
    pub won: u32,
    /// Not reported for quick play.
    pub played: Option<u32>,
}

impl PlayerRecord {
    pub(crate) fn failed(player_name: &str, platform: Platform, failure: LookupFailure) -> Self {
        Self {
            player_name: player_name.to_string(),
            original_name: None,
            platform,
            status: PlayerStatus::Failed(failure),
        }
    }

    /// `true` for public and private profiles alike.
    pub fn success(&self) -> bool {
        !matches!(self.status, PlayerStatus::Failed(_))
    }

    pub fn is_private(&self) -> bool {
        matches!(self.status, PlayerStatus::Private)
    }

    pub fn is_corrected(&self) -> bool {
        self.original_name.is_some()
    }

    pub fn failure(&self) -> Option<&LookupFailure> {
        match &self.status {
            PlayerStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Statistics, present only for a successful lookup of a public profile.
    pub fn stats(&self) -> Option<&PlayerStats> {
        match &self.status {
            PlayerStatus::Public(stats) => Some(stats.as_ref()),
            _ => None,
        }
    }

    pub fn actual_level(&self) -> Option<u64> {
        self.stats().map(PlayerStats::actual_level)
    }

    pub fn competitive(&self) -> Option<&ModeStats> {
        self.stats().and_then(|s| s.competitive.as_ref())
    }

    pub fn quickplay(&self) -> Option<&ModeStats> {
        self.stats().and_then(|s| s.quickplay.as_ref())
    }

    pub fn ratings(&self) -> Option<&RoleRatings> {
        self.stats().map(|s| &s.ratings)
    }
}
