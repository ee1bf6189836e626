//! DamageTrack aggregate - How much damage a character has taken
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the count only moves through `increment`,
//!   `decrement` and `reset`
//! - **Valid by construction**: tier bands are validated in `new()`, never
//!   at query time
//! - **Domain events**: successful mutations return [`DamageChanged`], failed
//!   ones return a [`DamageError`] and leave the count untouched

use crate::error::{DamageError, DomainError};
use crate::events::DamageChanged;
use crate::value_objects::{DamageTrackConfig, WoundBand, WoundThresholds, WoundTier};

/// A character's damage track
///
/// # Invariants
///
/// - `0 <= current_damage <= max_damage` at all times
/// - the wound tier is derived from the count on every read, never stored
///
/// # Example
///
/// ```
/// use cpsheet_domain::{DamageError, DamageTrack, DamageTrackConfig, WoundTier};
///
/// let mut track = DamageTrack::new(&DamageTrackConfig::default()).unwrap();
/// assert_eq!(track.current_wound_tier(), WoundTier::Light);
///
/// let change = track.increment().unwrap();
/// assert_eq!(change.current_damage, 1);
///
/// track.reset();
/// assert_eq!(track.decrement(), Err(DamageError::BelowZero));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageTrack {
    thresholds: WoundThresholds,
    current_damage: u32,
}

impl DamageTrack {
    /// Create an undamaged track.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTierConfiguration` if the configured
    /// bands do not partition `[0, max_damage]`.
    pub fn new(config: &DamageTrackConfig) -> Result<Self, DomainError> {
        Ok(Self::from_thresholds(config.thresholds()?))
    }

    /// Create an undamaged track over already validated thresholds.
    pub fn from_thresholds(thresholds: WoundThresholds) -> Self {
        Self {
            thresholds,
            current_damage: 0,
        }
    }

    /// Standard 40-point track.
    pub fn standard() -> Self {
        Self::from_thresholds(WoundThresholds::standard())
    }

    /// Restore a stored damage count (used when loading a saved sheet).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `damage` exceeds the capacity.
    pub fn with_damage(mut self, damage: u32) -> Result<Self, DomainError> {
        if damage > self.max_damage() {
            return Err(DomainError::validation(format!(
                "Stored damage {} exceeds max damage {}",
                damage,
                self.max_damage()
            )));
        }
        self.current_damage = damage;
        Ok(self)
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn current_damage(&self) -> u32 {
        self.current_damage
    }

    pub fn max_damage(&self) -> u32 {
        self.thresholds.max_damage()
    }

    /// Number of cells still unmarked.
    pub fn remaining(&self) -> u32 {
        self.max_damage() - self.current_damage
    }

    pub fn is_full(&self) -> bool {
        self.current_damage == self.max_damage()
    }

    pub fn current_wound_tier(&self) -> WoundTier {
        self.thresholds.tier_for(self.current_damage)
    }

    pub fn thresholds(&self) -> &WoundThresholds {
        &self.thresholds
    }

    /// Bands with their cell ranges, for labelling the track.
    pub fn bands(&self) -> impl Iterator<Item = WoundBand> + '_ {
        self.thresholds.bands()
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Mark one more damage cell.
    ///
    /// # Errors
    ///
    /// Returns `DamageError::MaxDamageExceeded` when every cell is marked.
    pub fn increment(&mut self) -> Result<DamageChanged, DamageError> {
        if self.is_full() {
            return Err(DamageError::MaxDamageExceeded {
                max: self.max_damage(),
            });
        }
        Ok(self.move_to(self.current_damage + 1))
    }

    /// Clear the most recently marked damage cell.
    ///
    /// # Errors
    ///
    /// Returns `DamageError::BelowZero` when no cell is marked.
    pub fn decrement(&mut self) -> Result<DamageChanged, DamageError> {
        if self.current_damage == 0 {
            return Err(DamageError::BelowZero);
        }
        Ok(self.move_to(self.current_damage - 1))
    }

    /// Clear every damage cell.
    ///
    /// Returns `None` when the track was already clear.
    pub fn reset(&mut self) -> Option<DamageChanged> {
        if self.current_damage == 0 {
            return None;
        }
        Some(self.move_to(0))
    }

    // Callers have already checked `next` against the bounds
    fn move_to(&mut self, next: u32) -> DamageChanged {
        let previous_damage = self.current_damage;
        let previous_tier = self.current_wound_tier();
        self.current_damage = next;
        DamageChanged {
            previous_damage,
            current_damage: next,
            max_damage: self.max_damage(),
            previous_tier,
            current_tier: self.current_wound_tier(),
        }
    }
}
