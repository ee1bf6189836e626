//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. The engine forwards them to observers.

pub mod damage_events;
pub mod skill_events;

pub use damage_events::*;
pub use skill_events::*;
