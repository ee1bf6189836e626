//! Value objects - Immutable objects defined by their attributes

mod damage_track_config;
mod skill_roll;
mod stat;
mod wound_thresholds;
mod wound_tier;

// Damage track configuration and tier banding
pub use damage_track_config::{DamageTrackConfig, TierBandConfig};
pub use wound_thresholds::{WoundBand, WoundThresholds, STANDARD_MAX_DAMAGE};
pub use wound_tier::{WoundTier, MAX_MORTAL_LEVEL};

// Stats and the damage modifiers derived from them
pub use stat::{stun_save_target, BodyType, Stat};

// Skill roll arithmetic
pub use skill_roll::compute_roll_value;
