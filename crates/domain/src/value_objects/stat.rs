//! Stat and BodyType - Character attributes and the damage modifiers they drive

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WoundTier;
use crate::error::DomainError;

/// The nine character stats. Serialized by abbreviation (`"REF"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stat {
    Int,
    Ref,
    Tech,
    Cool,
    Attr,
    Luck,
    Ma,
    Body,
    Emp,
}

impl Stat {
    pub const ALL: [Stat; 9] = [
        Stat::Int,
        Stat::Ref,
        Stat::Tech,
        Stat::Cool,
        Stat::Attr,
        Stat::Luck,
        Stat::Ma,
        Stat::Body,
        Stat::Emp,
    ];

    /// Short label printed on the stat grid.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Ref => "REF",
            Self::Tech => "TECH",
            Self::Cool => "COOL",
            Self::Attr => "ATTR",
            Self::Luck => "LUCK",
            Self::Ma => "MA",
            Self::Body => "BODY",
            Self::Emp => "EMP",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Int => "Intelligence",
            Self::Ref => "Reflexes",
            Self::Tech => "Technical Ability",
            Self::Cool => "Cool",
            Self::Attr => "Attractiveness",
            Self::Luck => "Luck",
            Self::Ma => "Movement Allowance",
            Self::Body => "Body Type",
            Self::Emp => "Empathy",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|stat| stat.abbreviation().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown stat: {}", s)))
    }
}

/// Build class derived from the BODY stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyType {
    VeryWeak,
    Weak,
    Average,
    Strong,
    VeryStrong,
    Superhuman,
}

impl BodyType {
    pub fn from_body(body: i32) -> Self {
        match body {
            i32::MIN..=2 => Self::VeryWeak,
            3..=4 => Self::Weak,
            5..=7 => Self::Average,
            8..=9 => Self::Strong,
            10 => Self::VeryStrong,
            _ => Self::Superhuman,
        }
    }

    /// Body Type Modifier: subtracted from every point of incoming damage.
    pub fn modifier(&self) -> i32 {
        match self {
            Self::VeryWeak => 0,
            Self::Weak => -1,
            Self::Average => -2,
            Self::Strong => -3,
            Self::VeryStrong => -4,
            Self::Superhuman => -5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Average => "Average",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
            Self::Superhuman => "Superhuman",
        }
    }
}

/// Target number for a stun (or death) save at the given tier.
///
/// The roll must come in at or under this value; it never drops below 0.
pub fn stun_save_target(body: i32, tier: WoundTier) -> i32 {
    body.saturating_add(tier.save_penalty()).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod stats {
        use super::*;

        #[test]
        fn parses_abbreviations_case_insensitively() {
            assert_eq!("REF".parse::<Stat>(), Ok(Stat::Ref));
            assert_eq!("tech".parse::<Stat>(), Ok(Stat::Tech));
            assert_eq!(" Body ".parse::<Stat>(), Ok(Stat::Body));
        }

        #[test]
        fn rejects_unknown_stat() {
            assert!(matches!("STR".parse::<Stat>(), Err(DomainError::Parse(_))));
        }

        #[test]
        fn every_stat_round_trips_through_its_abbreviation() {
            for stat in Stat::ALL {
                assert_eq!(stat.abbreviation().parse::<Stat>(), Ok(stat));
            }
        }

        #[test]
        fn serializes_as_abbreviation() {
            assert_eq!(serde_json::to_string(&Stat::Ma).unwrap(), "\"MA\"");
            assert_eq!(serde_json::to_string(&Stat::Cool).unwrap(), "\"COOL\"");
        }
    }

    mod body_type {
        use super::*;

        #[test]
        fn body_type_table() {
            assert_eq!(BodyType::from_body(2), BodyType::VeryWeak);
            assert_eq!(BodyType::from_body(3), BodyType::Weak);
            assert_eq!(BodyType::from_body(4), BodyType::Weak);
            assert_eq!(BodyType::from_body(5), BodyType::Average);
            assert_eq!(BodyType::from_body(7), BodyType::Average);
            assert_eq!(BodyType::from_body(8), BodyType::Strong);
            assert_eq!(BodyType::from_body(9), BodyType::Strong);
            assert_eq!(BodyType::from_body(10), BodyType::VeryStrong);
            assert_eq!(BodyType::from_body(11), BodyType::Superhuman);
        }

        #[test]
        fn modifiers() {
            assert_eq!(BodyType::from_body(1).modifier(), 0);
            assert_eq!(BodyType::from_body(6).modifier(), -2);
            assert_eq!(BodyType::from_body(10).modifier(), -4);
            assert_eq!(BodyType::from_body(15).modifier(), -5);
        }
    }

    mod stun_save {
        use super::*;

        #[test]
        fn light_wounds_save_against_body() {
            assert_eq!(stun_save_target(8, WoundTier::Light), 8);
        }

        #[test]
        fn worse_wounds_lower_the_target() {
            assert_eq!(stun_save_target(8, WoundTier::Serious), 7);
            assert_eq!(stun_save_target(8, WoundTier::Critical), 6);
            assert_eq!(stun_save_target(8, WoundTier::Mortal(0)), 5);
            assert_eq!(stun_save_target(8, WoundTier::Mortal(4)), 1);
        }

        #[test]
        fn target_never_goes_negative() {
            assert_eq!(stun_save_target(3, WoundTier::Mortal(6)), 0);
        }
    }
}
