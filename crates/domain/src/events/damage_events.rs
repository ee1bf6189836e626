//! Damage track events
//!
//! Emitted only when a mutation actually moved the damage count.

use serde::{Deserialize, Serialize};

use crate::value_objects::WoundTier;

/// The damage count of a track moved by a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageChanged {
    pub previous_damage: u32,
    pub current_damage: u32,
    pub max_damage: u32,
    pub previous_tier: WoundTier,
    pub current_tier: WoundTier,
}

impl DamageChanged {
    /// Whether the change crossed into a different wound tier.
    pub fn tier_changed(&self) -> bool {
        self.previous_tier != self.current_tier
    }

    /// Whether damage went up.
    pub fn is_increase(&self) -> bool {
        self.current_damage > self.previous_damage
    }
}
