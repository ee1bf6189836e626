//! WoundTier - Named severity bands of a damage track

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Highest mortal level on a standard track (Mortal 0 through Mortal 6).
pub const MAX_MORTAL_LEVEL: u8 = 6;

/// Severity of the wounds a character is carrying.
///
/// Ordered from least to most severe, so `Light < Serious < Mortal(0) < Mortal(1)`.
/// Serialized as its lowercase compact name (`"light"`, `"mortal3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WoundTier {
    Light,
    Serious,
    Critical,
    /// Mortal wound; the level drives the death save penalty
    Mortal(u8),
}

impl WoundTier {
    /// The ten tiers of a standard track, least severe first.
    pub fn standard() -> Vec<WoundTier> {
        let mut tiers = vec![Self::Light, Self::Serious, Self::Critical];
        tiers.extend((0..=MAX_MORTAL_LEVEL).map(Self::Mortal));
        tiers
    }

    /// Penalty applied to stun and death saves while at this tier.
    pub fn save_penalty(&self) -> i32 {
        match self {
            Self::Light => 0,
            Self::Serious => -1,
            Self::Critical => -2,
            Self::Mortal(level) => -(3 + i32::from(*level)),
        }
    }

    /// False for a mortal level past [`MAX_MORTAL_LEVEL`].
    pub fn in_range(&self) -> bool {
        match self {
            Self::Mortal(level) => *level <= MAX_MORTAL_LEVEL,
            _ => true,
        }
    }

    /// Mortal wounds call for a death save every turn.
    pub fn is_mortal(&self) -> bool {
        matches!(self, Self::Mortal(_))
    }

    fn compact_name(&self) -> String {
        match self {
            Self::Light => "light".to_string(),
            Self::Serious => "serious".to_string(),
            Self::Critical => "critical".to_string(),
            Self::Mortal(level) => format!("mortal{level}"),
        }
    }
}

impl fmt::Display for WoundTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Serious => write!(f, "Serious"),
            Self::Critical => write!(f, "Critical"),
            Self::Mortal(level) => write!(f, "Mortal {level}"),
        }
    }
}

impl FromStr for WoundTier {
    type Err = DomainError;

    /// Accepts `"Light"`, `"serious"`, `"Mortal 3"`, `"mortal_3"`, `"mortal3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "light" => Ok(Self::Light),
            "serious" => Ok(Self::Serious),
            "critical" => Ok(Self::Critical),
            other => {
                let level = other
                    .strip_prefix("mortal")
                    .and_then(|level| level.parse::<u8>().ok())
                    .ok_or_else(|| DomainError::parse(format!("Unknown wound tier: {}", s)))?;
                if level > MAX_MORTAL_LEVEL {
                    return Err(DomainError::parse(format!(
                        "Mortal level {} exceeds {}",
                        level, MAX_MORTAL_LEVEL
                    )));
                }
                Ok(Self::Mortal(level))
            }
        }
    }
}

impl TryFrom<String> for WoundTier {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WoundTier> for String {
    fn from(tier: WoundTier) -> Self {
        tier.compact_name()
    }
}
