//! SkillTable aggregate - The skill listings on one character sheet
//!
//! Listings are kept in insertion order and looked up by skill identity, so a
//! listing re-entered with new points replaces the old one in place.

use crate::entities::SkillListing;
use crate::events::SkillListingChange;
use crate::value_objects::Stat;

#[derive(Debug, Clone, Default)]
pub struct SkillTable {
    listings: Vec<SkillListing>,
}

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[SkillListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, name: &str, extension: Option<&str>) -> Option<&SkillListing> {
        self.listings
            .iter()
            .find(|listing| listing.is_skill(name, extension))
    }

    pub fn get_mut(&mut self, name: &str, extension: Option<&str>) -> Option<&mut SkillListing> {
        self.listings
            .iter_mut()
            .find(|listing| listing.is_skill(name, extension))
    }

    /// Insert a listing, replacing any listing for the same skill.
    pub fn upsert(&mut self, listing: SkillListing) -> SkillListingChange {
        match self.listings.iter_mut().find(|existing| **existing == listing) {
            Some(existing) => SkillListingChange::Replaced {
                previous: std::mem::replace(existing, listing),
            },
            None => {
                self.listings.push(listing);
                SkillListingChange::Added
            }
        }
    }

    pub fn remove(&mut self, name: &str, extension: Option<&str>) -> Option<SkillListing> {
        let index = self
            .listings
            .iter()
            .position(|listing| listing.is_skill(name, extension))?;
        Some(self.listings.remove(index))
    }

    /// Push a recomputed stat bonus into every listing linked to `stat`.
    ///
    /// Returns how many listings were updated.
    pub fn apply_stat_modifier(&mut self, stat: Stat, stat_modifier: i32) -> usize {
        let mut updated = 0;
        for listing in self
            .listings
            .iter_mut()
            .filter(|listing| listing.skill().linked_stat == Some(stat))
        {
            listing.set_stat_modifier(stat_modifier);
            updated += 1;
        }
        updated
    }

    /// Listings grouped under their category, categories in first-seen order.
    ///
    /// Uncategorized listings are grouped under `None`.
    pub fn by_category(&self) -> Vec<(Option<&str>, Vec<&SkillListing>)> {
        let mut groups: Vec<(Option<&str>, Vec<&SkillListing>)> = Vec::new();
        for listing in &self.listings {
            let category = listing.category();
            match groups.iter_mut().find(|(existing, _)| *existing == category) {
                Some((_, members)) => members.push(listing),
                None => groups.push((category, vec![listing])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Skill, SPECIAL_ABILITY_CATEGORY};

    fn listing(name: &str, stat: Stat, points: u32) -> SkillListing {
        SkillListing::new(Skill::new(name).with_linked_stat(stat), points, 0, None)
    }

    fn language(extension: &str, points: u32) -> SkillListing {
        SkillListing::new(
            Skill::new("Language")
                .with_extension(extension)
                .with_linked_stat(Stat::Int),
            points,
            0,
            None,
        )
    }

    #[test]
    fn upsert_adds_new_skill() {
        let mut table = SkillTable::new();
        assert_eq!(
            table.upsert(listing("Awareness", Stat::Int, 3)),
            SkillListingChange::Added
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn upsert_replaces_same_skill_in_place() {
        let mut table = SkillTable::new();
        table.upsert(listing("Awareness", Stat::Int, 3));
        table.upsert(listing("Handgun", Stat::Ref, 2));

        let change = table.upsert(listing("Awareness", Stat::Int, 6));
        match change {
            SkillListingChange::Replaced { previous } => assert_eq!(previous.points(), 3),
            other => panic!("Expected Replaced, got {other:?}"),
        }
        assert_eq!(table.len(), 2);
        assert_eq!(table.listings()[0].points(), 6);
    }

    #[test]
    fn extensions_are_separate_entries() {
        let mut table = SkillTable::new();
        table.upsert(language("English", 8));
        table.upsert(language("Spanish", 2));

        assert_eq!(table.len(), 2);
        let spanish = table.get("Language", Some("Spanish")).unwrap();
        assert_eq!(spanish.points(), 2);
        assert!(table.get("Language", None).is_none());
    }

    #[test]
    fn remove_by_identity() {
        let mut table = SkillTable::new();
        table.upsert(language("English", 8));
        let removed = table.remove("Language", Some("English")).unwrap();
        assert_eq!(removed.points(), 8);
        assert!(table.is_empty());
        assert!(table.remove("Language", Some("English")).is_none());
    }

    #[test]
    fn get_mut_allows_modifier_changes() {
        let mut table = SkillTable::new();
        table.upsert(listing("Stealth", Stat::Ref, 4));
        table.get_mut("Stealth", None).unwrap().set_modifier(-2);
        assert_eq!(table.get("Stealth", None).unwrap().skill_roll_value(), 2);
    }

    #[test]
    fn stat_modifier_reaches_linked_skills_only() {
        let mut table = SkillTable::new();
        table.upsert(listing("Handgun", Stat::Ref, 4));
        table.upsert(listing("Athletics", Stat::Ref, 2));
        table.upsert(listing("Awareness", Stat::Int, 5));

        assert_eq!(table.apply_stat_modifier(Stat::Ref, 7), 2);
        assert_eq!(table.get("Handgun", None).unwrap().skill_roll_value(), 11);
        assert_eq!(table.get("Athletics", None).unwrap().skill_roll_value(), 9);
        assert_eq!(table.get("Awareness", None).unwrap().skill_roll_value(), 5);
    }

    #[test]
    fn groups_by_category_in_first_seen_order() {
        let mut table = SkillTable::new();
        table.upsert(listing("Handgun", Stat::Ref, 4));
        table.upsert(listing("Awareness", Stat::Int, 5));
        table.upsert(SkillListing::new(
            Skill::special_ability("Combat Sense"),
            3,
            0,
            None,
        ));
        table.upsert(listing("Athletics", Stat::Ref, 2));
        table.upsert(SkillListing::new(Skill::new("Oddity"), 1, 0, None));

        let groups = table.by_category();
        let names: Vec<_> = groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            names,
            vec![
                Some("REF"),
                Some("INT"),
                Some(SPECIAL_ABILITY_CATEGORY),
                None
            ]
        );
        assert_eq!(groups[0].1.len(), 2);
    }
}
