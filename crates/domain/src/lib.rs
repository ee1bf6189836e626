extern crate self as cpsheet_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{DamageTrack, SkillTable};
pub use entities::{Skill, SkillKey, SkillListing, SPECIAL_ABILITY_CATEGORY};
pub use error::{DamageError, DomainError};
pub use events::{DamageChanged, SkillListingChange};
pub use ids::CharacterId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    compute_roll_value, stun_save_target, BodyType, DamageTrackConfig, Stat, TierBandConfig,
    WoundBand, WoundThresholds, WoundTier, MAX_MORTAL_LEVEL, STANDARD_MAX_DAMAGE,
};
