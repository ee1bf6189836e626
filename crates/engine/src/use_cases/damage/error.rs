//! Damage use case errors.

use tokio::task::JoinError;

#[derive(Debug, thiserror::Error)]
pub enum DamageUseCaseError {
    #[error("Unknown damage intent: {0}")]
    ParseIntent(String),
    #[error("Damage task failed: {0}")]
    Dispatch(#[from] JoinError),
}
