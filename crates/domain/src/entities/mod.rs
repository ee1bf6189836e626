//! Domain entities - Core business objects with identity

mod skill;
mod skill_listing;

pub use skill::{Skill, SkillKey};
pub use skill_listing::{SkillListing, SPECIAL_ABILITY_CATEGORY};
