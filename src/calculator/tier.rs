//! Service-quality tiers and their tip rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable service tier, without the custom percentage.
///
/// This is what a tier button represents: selecting `Custom` does not set a
/// percentage, that lives in its own text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTierKind {
    Good,
    Great,
    Awesome,
    Custom,
}

impl ServiceTierKind {
    /// All tiers in button order.
    pub const ALL: [ServiceTierKind; 4] = [Self::Good, Self::Great, Self::Awesome, Self::Custom];

    /// Human-readable label shown on the button and stored in history.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good Service (15%)",
            Self::Great => "Great Service (20%)",
            Self::Awesome => "Awesome Service (30%)",
            Self::Custom => "Custom Tip (%)",
        }
    }

    /// Fixed tip percentage, `None` for the custom tier.
    pub fn fixed_rate(self) -> Option<Decimal> {
        match self {
            Self::Good => Some(Decimal::from(15)),
            Self::Great => Some(Decimal::from(20)),
            Self::Awesome => Some(Decimal::from(30)),
            Self::Custom => None,
        }
    }

    /// Short keyword accepted by [`FromStr`].
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Great => "great",
            Self::Awesome => "awesome",
            Self::Custom => "custom",
        }
    }

    /// Attach the custom percentage, producing a fully resolved tier.
    pub fn with_custom_rate(self, custom_rate: Decimal) -> ServiceTier {
        match self {
            Self::Good => ServiceTier::Good,
            Self::Great => ServiceTier::Great,
            Self::Awesome => ServiceTier::Awesome,
            Self::Custom => ServiceTier::Custom(custom_rate),
        }
    }
}

impl fmt::Display for ServiceTierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text names no known tier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown service tier '{0}' (expected good, great, awesome or custom)")]
pub struct UnknownTier(pub String);

impl FromStr for ServiceTierKind {
    type Err = UnknownTier;

    /// Parses a keyword (case-insensitive) or an exact label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.keyword().eq_ignore_ascii_case(trimmed) || kind.label() == trimmed
            })
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// A tier with its effective percentage resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceTier {
    /// 15%
    Good,
    /// 20%
    Great,
    /// 30%
    Awesome,
    /// A user-supplied percentage.
    Custom(Decimal),
}

impl ServiceTier {
    /// The button this tier corresponds to.
    pub fn kind(self) -> ServiceTierKind {
        match self {
            Self::Good => ServiceTierKind::Good,
            Self::Great => ServiceTierKind::Great,
            Self::Awesome => ServiceTierKind::Awesome,
            Self::Custom(_) => ServiceTierKind::Custom,
        }
    }

    /// The tip percentage actually applied.
    pub fn effective_rate(self) -> Decimal {
        match self {
            Self::Custom(rate) => rate,
            fixed => fixed.kind().fixed_rate().unwrap_or(Decimal::ZERO),
        }
    }

    pub fn label(self) -> &'static str {
        self.kind().label()
    }
}
