use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::EnumString;

use crate::error::{OwError, Result};

/// Competitive skill bracket, ordered from lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Bracket {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
}

impl Bracket {
    /// Map a numeric skill rating (older API versions) onto its bracket.
    pub fn from_skill_rating(skill_rating: u32) -> Self {
        match skill_rating {
            0..=1499 => Bracket::Bronze,
            1500..=1999 => Bracket::Silver,
            2000..=2499 => Bracket::Gold,
            2500..=2999 => Bracket::Platinum,
            3000..=3499 => Bracket::Diamond,
            3500..=3999 => Bracket::Master,
            _ => Bracket::Grandmaster,
        }
    }
}

/// A tier within a bracket. Tier 1 is the best tier, tier 5 the worst.
///
/// Ranks are totally ordered: brackets first, then tiers, so `Gold 1 > Gold 5`
/// and `Diamond 5 > Platinum 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rank {
    bracket: Bracket,
    tier: u8,
}

impl Rank {
    pub const MIN_TIER: u8 = 1;
    pub const MAX_TIER: u8 = 5;

    pub fn new(bracket: Bracket, tier: u8) -> Result<Self> {
        if !(Self::MIN_TIER..=Self::MAX_TIER).contains(&tier) {
            return Err(OwError::InvalidTier(tier));
        }
        Ok(Self { bracket, tier })
    }

    /// Build a rank from a bracket name as the API reports it (`"Gold"`, `"grandmaster"`).
    pub fn from_group(group: &str, tier: u8) -> Result<Self> {
        let bracket = group
            .trim()
            .parse::<Bracket>()
            .map_err(|_: strum::ParseError| OwError::InvalidBracket(group.to_string()))?;
        Self::new(bracket, tier)
    }

    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bracket
            .cmp(&other.bracket)
            .then_with(|| other.tier.cmp(&self.tier))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.bracket, self.tier)
    }
}

impl FromStr for Rank {
    type Err = OwError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(tier), None) => {
                let tier = tier
                    .parse()
                    .map_err(|_| OwError::InvalidRank(s.to_string()))?;
                Self::from_group(group, tier)
            }
            _ => Err(OwError::InvalidRank(s.to_string())),
        }
    }
}

/// Competitive role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

/// The rating of one role, in whichever form the API version reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleRating {
    /// Numeric skill rating (`"level"` in older API versions).
    SkillRating(u32),
    /// Bracket and tier (`"group"`/`"tier"` in newer API versions).
    Ranked(Rank),
}

impl RoleRating {
    fn kind(&self) -> &'static str {
        match self {
            RoleRating::SkillRating(_) => "skill rating",
            RoleRating::Ranked(_) => "ranked",
        }
    }

    /// The bracket this rating falls in, whatever its form.
    pub fn bracket(&self) -> Bracket {
        match self {
            RoleRating::SkillRating(sr) => Bracket::from_skill_rating(*sr),
            RoleRating::Ranked(rank) => rank.bracket(),
        }
    }

    /// Compare two ratings of the same kind.
    ///
    /// Mixing a skill rating with a tiered rank returns
    /// [`OwError::IncompatibleRatings`].
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (RoleRating::SkillRating(a), RoleRating::SkillRating(b)) => Ok(a.cmp(b)),
            (RoleRating::Ranked(a), RoleRating::Ranked(b)) => Ok(a.cmp(b)),
            _ => Err(OwError::IncompatibleRatings {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl PartialOrd for RoleRating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// Per-role ratings of a public profile. Roles the player has not placed in are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleRatings {
    pub tank: Option<RoleRating>,
    pub damage: Option<RoleRating>,
    pub support: Option<RoleRating>,
}

impl RoleRatings {
    pub fn get(&self, role: Role) -> Option<&RoleRating> {
        match role {
            Role::Tank => self.tank.as_ref(),
            Role::Damage => self.damage.as_ref(),
            Role::Support => self.support.as_ref(),
        }
    }

    pub(crate) fn set(&mut self, role: Role, rating: RoleRating) {
        match role {
            Role::Tank => self.tank = Some(rating),
            Role::Damage => self.damage = Some(rating),
            Role::Support => self.support = Some(rating),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tank.is_none() && self.damage.is_none() && self.support.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(group: &str, tier: u8) -> Rank {
        Rank::from_group(group, tier).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(rank("Gold", 1) > rank("Gold", 5));
        assert!(rank("Diamond", 5) > rank("Platinum", 1));
        assert!(rank("Grandmaster", 5) > rank("Master", 1));
    }

    #[test]
    fn test_less_than() {
        assert!(rank("Bronze", 2) < rank("Bronze", 1));
        assert!(rank("Master", 1) < rank("Grandmaster", 5));
    }

    #[test]
    fn test_equal() {
        assert_eq!(rank("Gold", 1), rank("Gold", 1));
        assert_eq!(rank("Grandmaster", 5), rank("Grandmaster", 5));
        assert_ne!(rank("Gold", 1), rank("Gold", 2));
        assert_ne!(rank("Gold", 1), rank("Silver", 1));
    }

    #[test]
    fn test_sorting_puts_best_last() {
        let mut ranks = vec![
            rank("Master", 3),
            rank("Bronze", 5),
            rank("Master", 1),
            rank("Gold", 2),
        ];
        ranks.sort();
        let sorted = ranks.iter().map(Rank::to_string).collect::<Vec<_>>();
        assert_eq!(sorted, ["Bronze 5", "Gold 2", "Master 3", "Master 1"]);
    }

    #[test]
    fn test_invalid_ranks() {
        assert!(matches!(
            Rank::from_group("Wood", 1),
            Err(OwError::InvalidBracket(_))
        ));
        assert!(matches!(
            Rank::new(Bracket::Gold, 0),
            Err(OwError::InvalidTier(0))
        ));
        assert!(matches!(
            Rank::new(Bracket::Gold, 6),
            Err(OwError::InvalidTier(6))
        ));
        assert!(matches!(
            "Gold".parse::<Rank>(),
            Err(OwError::InvalidRank(_))
        ));
    }

    #[test]
    fn test_rank_from_str() {
        assert_eq!("grandmaster 2".parse::<Rank>().unwrap(), rank("Grandmaster", 2));
        assert_eq!(rank("Platinum", 4).to_string(), "Platinum 4");
    }

    #[test]
    fn test_bracket_from_skill_rating() {
        assert_eq!(Bracket::from_skill_rating(1499), Bracket::Bronze);
        assert_eq!(Bracket::from_skill_rating(2000), Bracket::Gold);
        assert_eq!(Bracket::from_skill_rating(3999), Bracket::Master);
        assert_eq!(Bracket::from_skill_rating(4500), Bracket::Grandmaster);
    }

    #[test]
    fn test_role_rating_comparison() {
        let low = RoleRating::SkillRating(2100);
        let high = RoleRating::SkillRating(3300);
        assert_eq!(low.try_cmp(&high).unwrap(), Ordering::Less);

        let gold = RoleRating::Ranked(rank("Gold", 3));
        let diamond = RoleRating::Ranked(rank("Diamond", 5));
        assert!(diamond > gold);

        assert!(matches!(
            low.try_cmp(&gold),
            Err(OwError::IncompatibleRatings { .. })
        ));
        assert_eq!(low.partial_cmp(&gold), None);
        assert_eq!(low.bracket(), Bracket::Gold);
    }
}
