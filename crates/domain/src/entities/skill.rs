//! Skill entity - A skill definition a character can list on their sheet
//!
//! A skill is identified by its name plus an optional extension, so
//! "Language (English)" and "Language (Spanish)" are separate skills.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Stat;

/// A skill that characters can allocate points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Qualifier for skills taken more than once (e.g., the language spoken)
    #[serde(default)]
    pub name_extension: Option<String>,
    #[serde(default)]
    pub description: String,
    /// The stat whose bonus is added to rolls with this skill
    #[serde(default)]
    pub linked_stat: Option<Stat>,
    /// Role-granted ability rather than a general skill
    #[serde(default)]
    pub is_special_ability: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_extension: None,
            description: String::new(),
            linked_stat: None,
            is_special_ability: false,
        }
    }

    pub fn special_ability(name: impl Into<String>) -> Self {
        let mut skill = Self::new(name);
        skill.is_special_ability = true;
        skill
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.name_extension = Some(extension.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_linked_stat(mut self, stat: Stat) -> Self {
        self.linked_stat = Some(stat);
        self
    }

    /// Identity of this skill, independent of description or linkage.
    pub fn key(&self) -> SkillKey {
        SkillKey::new(self.name.clone(), self.name_extension.clone())
    }
}

/// `(name, extension)` pair that identifies a skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillKey {
    pub name: String,
    pub extension: Option<String>,
}

impl SkillKey {
    pub fn new(name: impl Into<String>, extension: Option<String>) -> Self {
        Self {
            name: name.into(),
            extension,
        }
    }
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(extension) => write!(f, "{} ({})", self.name, extension),
            None => write!(f, "{}", self.name),
        }
    }
}
