//! Thread-safe damage tracker shared between input and rendering contexts.
//!
//! Taps arrive on whatever context the caller dispatches them to while the
//! renderer reads from another. Every operation takes the same mutex, so
//! increments and decrements are serialized and no update is lost.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cpsheet_domain::{
    CharacterId, DamageChanged, DamageError, DamageTrack, DamageTrackConfig, DomainError,
    WoundTier,
};

use super::ports::{DamageNotification, DamageObserver};

/// Consistent view of a track taken under a single lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageSnapshot {
    pub current_damage: u32,
    pub max_damage: u32,
    pub tier: WoundTier,
}

/// A character's damage track behind a mutex, with change observers
pub struct SharedDamageTracker {
    character_id: CharacterId,
    track: Mutex<DamageTrack>,
    observers: Vec<Arc<dyn DamageObserver>>,
}

impl SharedDamageTracker {
    /// Create an undamaged tracker.
    ///
    /// # Errors
    ///
    /// Fails with `DomainError::InvalidTierConfiguration` if the bands in
    /// `config` are invalid; no tracker is built in that case.
    pub fn new(character_id: CharacterId, config: &DamageTrackConfig) -> Result<Self, DomainError> {
        Ok(Self::from_track(character_id, DamageTrack::new(config)?))
    }

    /// Wrap an existing track (e.g. one restored from a saved sheet).
    pub fn from_track(character_id: CharacterId, track: DamageTrack) -> Self {
        tracing::debug!(
            character_id = %character_id,
            current = track.current_damage(),
            max = track.max_damage(),
            "Damage tracker created"
        );
        Self {
            character_id,
            track: Mutex::new(track),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified after each successful change
    pub fn with_observer(mut self, observer: Arc<dyn DamageObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn current_damage(&self) -> u32 {
        self.lock().current_damage()
    }

    pub fn max_damage(&self) -> u32 {
        self.lock().max_damage()
    }

    pub fn current_wound_tier(&self) -> WoundTier {
        self.lock().current_wound_tier()
    }

    pub fn snapshot(&self) -> DamageSnapshot {
        let track = self.lock();
        DamageSnapshot {
            current_damage: track.current_damage(),
            max_damage: track.max_damage(),
            tier: track.current_wound_tier(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn increment(&self) -> Result<DamageChanged, DamageError> {
        self.mutate("increment", DamageTrack::increment)
    }

    pub fn decrement(&self) -> Result<DamageChanged, DamageError> {
        self.mutate("decrement", DamageTrack::decrement)
    }

    /// Clear all damage. Observers hear about it only if damage was marked.
    pub fn reset(&self) -> Option<DamageChanged> {
        let mut track = self.lock();
        let change = track.reset()?;
        self.publish("reset", &change);
        Some(change)
    }

    fn mutate(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&mut DamageTrack) -> Result<DamageChanged, DamageError>,
    ) -> Result<DamageChanged, DamageError> {
        let mut track = self.lock();
        match apply(&mut *track) {
            Ok(change) => {
                self.publish(operation, &change);
                Ok(change)
            }
            Err(err) => {
                tracing::debug!(
                    character_id = %self.character_id,
                    operation,
                    current = track.current_damage(),
                    error = %err,
                    "Damage change rejected"
                );
                Err(err)
            }
        }
    }

    // Runs with the track lock held
    fn publish(&self, operation: &'static str, change: &DamageChanged) {
        tracing::debug!(
            character_id = %self.character_id,
            operation,
            current = change.current_damage,
            max = change.max_damage,
            tier = %change.current_tier,
            "Damage changed"
        );
        if change.tier_changed() {
            tracing::info!(
                character_id = %self.character_id,
                from = %change.previous_tier,
                to = %change.current_tier,
                "Wound tier changed"
            );
        }

        let notification = DamageNotification {
            character_id: self.character_id,
            change: *change,
        };
        for observer in &self.observers {
            observer.on_damage_changed(&notification);
        }
    }

    // Mutations validate before applying, so a poisoned guard still holds a valid track
    fn lock(&self) -> MutexGuard<'_, DamageTrack> {
        self.track.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
