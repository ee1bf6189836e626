//! Damage intents from the rendering layer.
//!
//! A tap on the track arrives as a [`DamageIntent`]. Hitting either end of
//! the track is an expected outcome, so it comes back as
//! [`DamageIntentOutcome::AtBoundary`] rather than as an error.

mod error;

use std::str::FromStr;
use std::sync::Arc;

use cpsheet_domain::{DamageChanged, DamageError};

use crate::infrastructure::damage_tracker::SharedDamageTracker;

pub use error::DamageUseCaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageIntent {
    Increase,
    Decrease,
    Reset,
}

impl FromStr for DamageIntent {
    type Err = DamageUseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "increase" | "inc" => Ok(Self::Increase),
            "-" | "decrease" | "dec" => Ok(Self::Decrease),
            "reset" => Ok(Self::Reset),
            other => Err(DamageUseCaseError::ParseIntent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageIntentOutcome {
    Applied(DamageChanged),
    /// The track was already at the end the intent pushed against
    AtBoundary(DamageError),
    /// Reset on an empty track
    Unchanged,
}

impl DamageIntentOutcome {
    pub fn change(&self) -> Option<&DamageChanged> {
        match self {
            Self::Applied(change) => Some(change),
            _ => None,
        }
    }
}

/// Applies damage intents to a shared tracker.
#[derive(Clone)]
pub struct DamageUseCase {
    tracker: Arc<SharedDamageTracker>,
}

impl DamageUseCase {
    pub fn new(tracker: Arc<SharedDamageTracker>) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &Arc<SharedDamageTracker> {
        &self.tracker
    }

    pub fn handle(&self, intent: DamageIntent) -> DamageIntentOutcome {
        let result = match intent {
            DamageIntent::Increase => self.tracker.increment(),
            DamageIntent::Decrease => self.tracker.decrement(),
            DamageIntent::Reset => {
                return match self.tracker.reset() {
                    Some(change) => DamageIntentOutcome::Applied(change),
                    None => DamageIntentOutcome::Unchanged,
                };
            }
        };

        match result {
            Ok(change) => DamageIntentOutcome::Applied(change),
            Err(err) => {
                tracing::debug!(
                    character_id = %self.tracker.character_id(),
                    ?intent,
                    error = %err,
                    "Damage intent hit track boundary"
                );
                DamageIntentOutcome::AtBoundary(err)
            }
        }
    }

    /// Run the intent off the async executor.
    ///
    /// The tracker lock is blocking and observers run under it, so the
    /// mutation goes to the blocking pool.
    pub async fn dispatch(
        &self,
        intent: DamageIntent,
    ) -> Result<DamageIntentOutcome, DamageUseCaseError> {
        let use_case = self.clone();
        let outcome = tokio::task::spawn_blocking(move || use_case.handle(intent)).await?;
        Ok(outcome)
    }
}
