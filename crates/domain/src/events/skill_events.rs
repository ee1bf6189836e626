//! Skill table events

use crate::entities::SkillListing;

/// Outcome of inserting a listing into a skill table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillListingChange {
    /// No listing for this skill existed before
    Added,
    /// A listing with the same identity was replaced
    Replaced { previous: SkillListing },
}
