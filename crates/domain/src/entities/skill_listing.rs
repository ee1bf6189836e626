//! SkillListing entity - A skill as recorded on one character's sheet
//!
//! Equality and hashing follow the skill's identity only. A listing whose
//! points or modifiers changed is still the same listing.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Skill, SkillKey};
use crate::value_objects::compute_roll_value;

/// Category shown for role special abilities.
pub const SPECIAL_ABILITY_CATEGORY: &str = "Special Ability";

/// A character's points and modifiers in one skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SkillListingRecord", into = "SkillListingRecord")]
pub struct SkillListing {
    skill: Skill,
    /// Table section heading; the linked stat or "Special Ability"
    category: Option<String>,
    /// Points allotted by the player, fixed once entered
    points: u32,
    /// Temporary positive or negative effects, not including the linked stat
    modifier: i32,
    /// Bonus from the linked stat, supplied by whoever owns the stats
    stat_modifier: i32,
}

impl SkillListing {
    pub fn new(skill: Skill, points: u32, modifier: i32, stat_modifier: Option<i32>) -> Self {
        let category = category_for(&skill);
        Self {
            skill,
            category,
            points,
            modifier,
            stat_modifier: stat_modifier.unwrap_or(0),
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    pub fn key(&self) -> SkillKey {
        self.skill.key()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn stat_modifier(&self) -> i32 {
        self.stat_modifier
    }

    /// Value added to the skill check roll, recomputed on every call.
    pub fn skill_roll_value(&self) -> i32 {
        let base = i32::try_from(self.points).unwrap_or(i32::MAX);
        compute_roll_value(base, self.modifier, self.stat_modifier)
    }

    /// Whether this listing is for the skill named `name` with `extension`.
    pub fn is_skill(&self, name: &str, extension: Option<&str>) -> bool {
        self.skill.name == name && self.skill.name_extension.as_deref() == extension
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Mutation
    // ──────────────────────────────────────────────────────────────────────────

    pub fn set_modifier(&mut self, modifier: i32) {
        self.modifier = modifier;
    }

    pub fn set_stat_modifier(&mut self, stat_modifier: i32) {
        self.stat_modifier = stat_modifier;
    }
}

fn category_for(skill: &Skill) -> Option<String> {
    if skill.is_special_ability {
        Some(SPECIAL_ABILITY_CATEGORY.to_string())
    } else {
        skill.linked_stat.map(|stat| stat.abbreviation().to_string())
    }
}

impl PartialEq for SkillListing {
    fn eq(&self, other: &Self) -> bool {
        self.skill.name == other.skill.name
            && self.skill.name_extension == other.skill.name_extension
    }
}

impl Eq for SkillListing {}

impl Hash for SkillListing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.skill.name.hash(state);
        self.skill.name_extension.hash(state);
    }
}

/// Stored form of a listing
#[derive(Serialize, Deserialize)]
struct SkillListingRecord {
    skill: Skill,
    #[serde(default)]
    category: Option<String>,
    points: u32,
    #[serde(default)]
    modifier: i32,
    #[serde(default)]
    stat_modifier: i32,
}

impl From<SkillListingRecord> for SkillListing {
    fn from(record: SkillListingRecord) -> Self {
        let category = record.category.or_else(|| category_for(&record.skill));
        Self {
            skill: record.skill,
            category,
            points: record.points,
            modifier: record.modifier,
            stat_modifier: record.stat_modifier,
        }
    }
}

impl From<SkillListing> for SkillListingRecord {
    fn from(listing: SkillListing) -> Self {
        Self {
            skill: listing.skill,
            category: listing.category,
            points: listing.points,
            modifier: listing.modifier,
            stat_modifier: listing.stat_modifier,
        }
    }
}
