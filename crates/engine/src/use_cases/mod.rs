//! Use cases - orchestration between the rendering layer and the tracker.

pub mod damage;

pub use damage::{DamageIntent, DamageIntentOutcome, DamageUseCase, DamageUseCaseError};
