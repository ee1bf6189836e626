//! Fan-out of damage notifications to async renderers.
//!
//! Receivers that fall behind by more than the channel capacity see
//! `RecvError::Lagged` and should re-read the tracker snapshot.

use tokio::sync::broadcast;

use super::ports::{DamageNotification, DamageObserver};

pub struct BroadcastDamageObserver {
    sender: broadcast::Sender<DamageNotification>,
}

impl BroadcastDamageObserver {
    /// Create an observer buffering up to `capacity` notifications (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DamageNotification> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl DamageObserver for BroadcastDamageObserver {
    fn on_damage_changed(&self, notification: &DamageNotification) {
        // Err only means nobody is listening right now
        if self.sender.send(*notification).is_err() {
            tracing::trace!(
                character_id = %notification.character_id,
                "No renderer subscribed to damage notifications"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    use super::*;
    use crate::infrastructure::damage_tracker::SharedDamageTracker;
    use cpsheet_domain::{CharacterId, DamageTrackConfig, WoundTier};

    fn tracker_with(observer: Arc<BroadcastDamageObserver>) -> SharedDamageTracker {
        SharedDamageTracker::new(CharacterId::new(), &DamageTrackConfig::default())
            .unwrap()
            .with_observer(observer)
    }

    #[tokio::test]
    async fn subscribers_receive_changes_in_order() {
        let observer = Arc::new(BroadcastDamageObserver::new(16));
        let mut rx = observer.subscribe();
        let tracker = tracker_with(observer.clone());

        for _ in 0..4 {
            tracker.increment().unwrap();
        }
        tracker.decrement().unwrap();

        let mut counts = Vec::new();
        for _ in 0..5 {
            counts.push(rx.recv().await.unwrap().change.current_damage);
        }
        assert_eq!(counts, vec![1, 2, 3, 4, 3]);
    }

    #[tokio::test]
    async fn tier_change_is_visible_to_subscriber() {
        let observer = Arc::new(BroadcastDamageObserver::new(16));
        let mut rx = observer.subscribe();
        let tracker = tracker_with(observer.clone());

        for _ in 0..4 {
            tracker.increment().unwrap();
        }
        let mut last = None;
        while let Ok(notification) = rx.try_recv() {
            last = Some(notification);
        }
        let last = last.unwrap();
        assert_eq!(last.change.current_tier, WoundTier::Serious);
        assert!(last.change.tier_changed());
        assert_eq!(last.character_id, tracker.character_id());
    }

    #[tokio::test]
    async fn rejected_changes_are_not_broadcast() {
        let observer = Arc::new(BroadcastDamageObserver::new(4));
        let mut rx = observer.subscribe();
        let tracker = tracker_with(observer.clone());

        assert!(tracker.decrement().is_err());
        assert!(tracker.reset().is_none());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn slow_subscriber_sees_lag() {
        let observer = Arc::new(BroadcastDamageObserver::new(2));
        let mut rx = observer.subscribe();
        let tracker = tracker_with(observer.clone());

        for _ in 0..5 {
            tracker.increment().unwrap();
        }
        assert!(matches!(rx.recv().await, Err(RecvError::Lagged(3))));
        // Oldest retained notifications follow the lag report
        assert_eq!(rx.recv().await.unwrap().change.current_damage, 4);
    }

    #[test]
    fn sending_without_subscribers_is_harmless() {
        let observer = Arc::new(BroadcastDamageObserver::new(0));
        assert_eq!(observer.receiver_count(), 0);
        let tracker = tracker_with(observer);
        assert!(tracker.increment().is_ok());
        assert_eq!(tracker.current_damage(), 1);
    }
}
