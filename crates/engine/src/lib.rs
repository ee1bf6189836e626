//! Character sheet engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Shared tracker, observer ports and adapters, configuration
//! - `use_cases/` - Damage intents from the rendering layer

pub mod infrastructure;
pub mod use_cases;
