//! # Pricing Tiers
//!
//! Defines the [`Tier`] enum, the five size/weight classes a package can be
//! priced at, together with the published limits of each class. The tier's
//! position in [`Tier::ALL`] is also its column in the cost table file.
//!
//! | # | Tier | Max size (mm) | Max girth (mm) | Max weight (g) |
//! |---|------|---------------|----------------|----------------|
//! | 0 | Small | 300 x 300 x 150 | - | 1000 |
//! | 1 | Medium | 600 x 300 x 150 | - | 2000 |
//! | 2 | LargeLight | 1200 x 600 x 600 | 3000 | 5000 |
//! | 3 | LargeMedium | 1200 x 600 x 600 | 3000 | 10000 |
//! | 4 | LargeHeavy | 1200 x 600 x 600 | - | 31000 |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::package::{
    CanonicalPackage, MAX_HEIGHT_MM, MAX_LENGTH_MM, MAX_WEIGHT_G, MAX_WIDTH_MM,
};

/// Number of tiers, and therefore of prices in a cost table.
pub const TIER_COUNT: usize = 5;

/// Girth ceiling shared by the two lighter large tiers, in millimetres.
pub const LARGE_GIRTH_LIMIT_MM: i64 = 3000;

/// A priced size/weight class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Up to 300 x 300 x 150 mm and 1 kg.
    Small,
    /// Up to 600 x 300 x 150 mm and 2 kg.
    Medium,
    /// Large envelope, girth up to 3 m, up to 5 kg.
    LargeLight,
    /// Large envelope, girth up to 3 m, up to 10 kg.
    LargeMedium,
    /// Large envelope, up to 31 kg. Also catches every valid package the
    /// lighter tiers reject.
    LargeHeavy,
}

/// Inclusive limits a canonical package must meet to fall into a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierLimits {
    /// Longest side, mm.
    pub max_length: i64,
    /// Middle side, mm.
    pub max_width: i64,
    /// Shortest side, mm.
    pub max_height: i64,
    /// Belt measurement, mm. `None` when the tier has no girth limit.
    pub max_girth: Option<i64>,
    /// Weight, g.
    pub max_weight: i64,
}

impl TierLimits {
    /// Whether `pkg` is within every limit.
    pub fn admits(&self, pkg: &CanonicalPackage) -> bool {
        pkg.length() <= self.max_length
            && pkg.width() <= self.max_width
            && pkg.height() <= self.max_height
            && self.max_girth.map_or(true, |g| pkg.girth() <= g)
            && pkg.weight() <= self.max_weight
    }
}

impl Tier {
    /// All tiers in priority order, which is also cost table column order.
    pub const ALL: [Tier; TIER_COUNT] = [
        Self::Small,
        Self::Medium,
        Self::LargeLight,
        Self::LargeMedium,
        Self::LargeHeavy,
    ];

    /// Column of this tier's price in the cost table.
    pub fn index(&self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::LargeLight => 2,
            Self::LargeMedium => 3,
            Self::LargeHeavy => 4,
        }
    }

    /// Returns the snake_case identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLight => "large_light",
            Self::LargeMedium => "large_medium",
            Self::LargeHeavy => "large_heavy",
        }
    }

    /// The published limits of this tier.
    pub fn limits(&self) -> TierLimits {
        match self {
            Self::Small => TierLimits {
                max_length: 300,
                max_width: 300,
                max_height: 150,
                max_girth: None,
                max_weight: 1000,
            },
            Self::Medium => TierLimits {
                max_length: 600,
                max_width: 300,
                max_height: 150,
                max_girth: None,
                max_weight: 2000,
            },
            Self::LargeLight => TierLimits {
                max_girth: Some(LARGE_GIRTH_LIMIT_MM),
                max_weight: 5000,
                ..Self::large_envelope()
            },
            Self::LargeMedium => TierLimits {
                max_girth: Some(LARGE_GIRTH_LIMIT_MM),
                max_weight: 10_000,
                ..Self::large_envelope()
            },
            Self::LargeHeavy => Self::large_envelope(),
        }
    }

    fn large_envelope() -> TierLimits {
        TierLimits {
            max_length: MAX_LENGTH_MM,
            max_width: MAX_WIDTH_MM,
            max_height: MAX_HEIGHT_MM,
            max_girth: None,
            max_weight: MAX_WEIGHT_G,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tier name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier: {0:?}")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}
