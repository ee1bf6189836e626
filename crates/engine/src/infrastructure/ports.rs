//! Port traits for infrastructure boundaries.
//!
//! The rendering layer sits behind [`DamageObserver`]; the engine never
//! knows how damage cells are drawn.

use cpsheet_domain::{CharacterId, DamageChanged};
use serde::Serialize;

/// A successful damage change, tagged with the character it belongs to.
///
/// Serialized with camelCase keys for renderers outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageNotification {
    pub character_id: CharacterId,
    pub change: DamageChanged,
}

/// Receives a notification after every successful damage mutation.
///
/// Called while the tracker lock is held, so notifications arrive in
/// mutation order. Implementations must not call back into the tracker.
/// A panicking observer keeps the observers registered after it from
/// hearing that change; the change itself stays applied.
#[cfg_attr(test, mockall::automock)]
pub trait DamageObserver: Send + Sync {
    fn on_damage_changed(&self, notification: &DamageNotification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpsheet_domain::{DamageTrack, WoundTier};

    #[test]
    fn notification_serializes_with_camel_case_keys() {
        let mut track = DamageTrack::standard().with_damage(3).unwrap();
        let character_id = CharacterId::new();
        let notification = DamageNotification {
            character_id,
            change: track.increment().unwrap(),
        };

        let json = serde_json::to_value(notification).unwrap();
        assert_eq!(json["characterId"], character_id.to_string());
        assert_eq!(json["change"]["currentDamage"], 4);
        assert_eq!(json["change"]["maxDamage"], 40);
        assert_eq!(json["change"]["previousTier"], "light");
        assert_eq!(json["change"]["currentTier"], "serious");
        assert_eq!(notification.change.current_tier, WoundTier::Serious);
    }
}
