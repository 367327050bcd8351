// SPDX-License-Identifier: MPL-2.0
//! Process-wide alert store with publish/subscribe semantics.
//!
//! The store owns the ordered list of active alerts. Every mutation
//! (publish, dismiss, expiry sweep, clear) hands the full list to each
//! registered listener, which is how the on-screen container stays in sync.
//!
//! # Usage
//!
//! ```
//! use iced_alerts::store::{Severity, Store};
//! use std::sync::Arc;
//!
//! let store = Arc::new(Store::default());
//! let guard = store.subscribe(|alerts| println!("{} active", alerts.len()));
//!
//! let id = store.publish(Severity::Success, "Saved");
//! assert!(store.contains(id));
//!
//! store.dismiss(id);
//! guard.unsubscribe();
//! ```

pub mod expiry;
mod record;

pub use record::{Alert, AlertId, Severity, SeverityDurations};

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use std::time::{Duration, Instant};

type Listener = Arc<dyn Fn(&[Alert]) + Send + Sync>;

/// Returns the process-wide store, creating it on first use.
pub fn global() -> Arc<Store> {
    static GLOBAL: OnceLock<Arc<Store>> = OnceLock::new();
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(Store::default())))
}

#[derive(Default)]
struct Inner {
    alerts: Vec<Alert>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
    durations: SeverityDurations,
    /// Highest id ever accepted; anything at or below it is stale.
    last_id: Option<AlertId>,
}

impl Inner {
    fn insert(&mut self, alert: Alert) -> bool {
        let id = alert.id();
        if self.last_id.is_some_and(|last| id <= last) {
            log::warn!("alert {id} is stale or already published, ignoring");
            return false;
        }
        log::debug!(
            "alert {id} published ({}, {} ms)",
            alert.severity(),
            alert.duration().as_millis()
        );
        self.last_id = Some(id);
        self.alerts.push(alert);
        true
    }
}

/// Ordered list of active alerts plus the listeners watching it.
#[derive(Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Store")
            .field("alerts", &inner.alerts.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl Store {
    /// Creates an empty store using `durations` for severity defaults.
    #[must_use]
    pub fn new(durations: SeverityDurations) -> Self {
        Self {
            inner: Mutex::new(Inner {
                durations,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking listener never runs under the lock, so a poisoned
        // mutex still guards a consistent list.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the default durations used by future [`Store::publish`] calls.
    pub fn set_default_durations(&self, durations: SeverityDurations) {
        self.lock().durations = durations;
    }

    /// Returns the default durations currently in effect.
    #[must_use]
    pub fn default_durations(&self) -> SeverityDurations {
        self.lock().durations
    }

    /// Appends an alert using the severity's default duration.
    pub fn publish(&self, severity: Severity, message: impl Into<String>) -> AlertId {
        let duration = self.lock().durations.for_severity(severity);
        self.publish_for(severity, message, duration)
    }

    /// Appends an alert that stays up for `duration`.
    ///
    /// `Duration::MAX` keeps the alert up until it is dismissed.
    pub fn publish_for(
        &self,
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
    ) -> AlertId {
        let message = message.into();
        let id = {
            let mut inner = self.lock();
            // Ids are drawn under the lock so they reach the list in order.
            let alert = Alert::new(severity, message, duration);
            let id = alert.id();
            inner.insert(alert);
            id
        };
        self.notify();
        id
    }

    /// Appends an already-built record.
    ///
    /// Records must arrive in creation order: a record whose id is not newer
    /// than every id this store has accepted (including dismissed ones) is
    /// ignored, so ids are never revived.
    pub fn push(&self, alert: Alert) -> AlertId {
        let id = alert.id();
        let inserted = self.lock().insert(alert);
        if inserted {
            self.notify();
        }
        id
    }

    /// Removes an alert by id.
    ///
    /// Returns `true` if the alert was still active.
    pub fn dismiss(&self, id: AlertId) -> bool {
        let removed = {
            let mut inner = self.lock();
            match inner.alerts.iter().position(|a| a.id() == id) {
                Some(pos) => {
                    inner.alerts.remove(pos);
                    true
                }
                None => false,
            }
        };

        if removed {
            log::debug!("alert {id} dismissed");
            self.notify();
        }
        removed
    }

    /// Removes every alert whose timer has elapsed at `now`.
    ///
    /// Listeners are notified once, and only if something was removed.
    pub fn remove_expired(&self, now: Instant) -> Vec<AlertId> {
        let expired: Vec<AlertId> = {
            let mut inner = self.lock();
            let expired = inner
                .alerts
                .iter()
                .filter(|a| a.is_expired(now))
                .map(Alert::id)
                .collect::<Vec<_>>();
            inner.alerts.retain(|a| !a.is_expired(now));
            expired
        };

        if !expired.is_empty() {
            log::debug!("{} alert(s) expired", expired.len());
            self.notify();
        }
        expired
    }

    /// Removes every alert.
    pub fn clear(&self) {
        let had_alerts = {
            let mut inner = self.lock();
            let had_alerts = !inner.alerts.is_empty();
            inner.alerts.clear();
            had_alerts
        };
        if had_alerts {
            self.notify();
        }
    }

    /// Returns a copy of the active alerts, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().alerts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: AlertId) -> bool {
        self.lock().alerts.iter().any(|a| a.id() == id)
    }

    /// Registers a listener called with the full list after every change.
    ///
    /// The listener is not called on registration; read [`Store::snapshot`]
    /// for the current state. It stays registered until the returned guard
    /// is dropped or [`ListenerGuard::unsubscribe`] is called.
    pub fn subscribe<F>(self: &Arc<Self>, listener: F) -> ListenerGuard
    where
        F: Fn(&[Alert]) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let key = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((key, Arc::new(listener)));

        ListenerGuard {
            store: Arc::downgrade(self),
            key,
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn unsubscribe(&self, key: u64) {
        self.lock().listeners.retain(|(k, _)| *k != key);
    }

    fn notify(&self) {
        // Listeners run outside the lock so they may call back into the store.
        let (alerts, listeners) = {
            let inner = self.lock();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.alerts.clone(), listeners)
        };

        for listener in listeners {
            listener(&alerts);
        }
    }
}

/// Keeps a store listener registered for as long as it lives.
#[derive(Debug)]
#[must_use = "dropping the guard unsubscribes the listener"]
pub struct ListenerGuard {
    store: Weak<Store>,
    key: u64,
}

impl ListenerGuard {
    /// Removes the listener now.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> Arc<Store> {
        Arc::new(Store::default())
    }

    #[test]
    fn new_store_is_empty() {
        let store = store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn publish_preserves_insertion_order() {
        let store = store();
        let a = store.publish(Severity::Success, "first");
        let b = store.publish(Severity::Error, "second");
        let c = store.publish(Severity::Warning, "third");

        let ids: Vec<AlertId> = store.snapshot().iter().map(Alert::id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn publish_uses_severity_default_duration() {
        let store = Arc::new(Store::new(SeverityDurations {
            success: Duration::from_secs(1),
            info: Duration::from_secs(2),
            warning: Duration::from_secs(3),
            error: Duration::from_secs(4),
        }));
        store.publish(Severity::Warning, "careful");

        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].duration(), Duration::from_secs(3));
    }

    #[test]
    fn publish_for_overrides_duration() {
        let store = store();
        store.publish_for(Severity::Info, "long", Duration::from_secs(30));
        assert_eq!(store.snapshot()[0].duration(), Duration::from_secs(30));
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let store = store();
        let a = store.publish(Severity::Success, "a");
        let b = store.publish(Severity::Success, "b");

        assert!(store.dismiss(a));
        assert!(!store.contains(a));
        assert!(store.contains(b));
    }

    #[test]
    fn dismiss_unknown_id_returns_false_and_does_not_notify() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!store.dismiss(AlertId::next()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listeners_receive_full_list_after_each_change() {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _guard = store.subscribe(move |alerts| {
            sink.lock().unwrap().push(alerts.len());
        });

        let a = store.publish(Severity::Success, "a");
        store.publish(Severity::Success, "b");
        store.dismiss(a);
        store.clear();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn subscribe_does_not_invoke_listener() {
        let store = store();
        store.publish(Severity::Info, "existing");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.publish(Severity::Success, "one");
        guard.unsubscribe();
        store.publish(Severity::Success, "two");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let store = store();
        {
            let _guard = store.subscribe(|_| {});
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn guard_outliving_store_is_harmless() {
        let store = store();
        let guard = store.subscribe(|_| {});
        drop(store);
        drop(guard);
    }

    #[test]
    fn listener_may_reenter_store() {
        let store = store();
        let weak = Arc::downgrade(&store);
        let _guard = store.subscribe(move |alerts| {
            if let (Some(store), Some(first)) = (weak.upgrade(), alerts.first()) {
                if first.message() == "bounce" {
                    store.dismiss(first.id());
                }
            }
        });

        store.publish(Severity::Warning, "bounce");
        assert!(store.is_empty());
    }

    #[test]
    fn remove_expired_drops_elapsed_alerts_only() {
        let store = store();
        let now = Instant::now();
        let short = store.push(Alert::created_at(
            Severity::Success,
            "short",
            Duration::from_millis(100),
            now,
        ));
        let long = store.push(Alert::created_at(
            Severity::Success,
            "long",
            Duration::from_secs(10),
            now,
        ));

        let expired = store.remove_expired(now + Duration::from_millis(500));
        assert_eq!(expired, vec![short]);
        assert!(store.contains(long));
    }

    #[test]
    fn remove_expired_notifies_once() {
        let store = store();
        let now = Instant::now();
        for i in 0..3 {
            store.push(Alert::created_at(
                Severity::Info,
                format!("a{i}"),
                Duration::from_millis(10),
                now,
            ));
        }
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(store.remove_expired(now + Duration::from_secs(1)).len(), 3);
        assert!(store.remove_expired(now + Duration::from_secs(2)).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_on_empty_store_does_not_notify() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.clear();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn set_default_durations_affects_future_publishes() {
        let store = store();
        store.set_default_durations(SeverityDurations::uniform(Duration::from_secs(9)));
        store.publish(Severity::Error, "late");
        assert_eq!(store.snapshot()[0].duration(), Duration::from_secs(9));
    }

    #[test]
    fn pushing_the_same_record_twice_keeps_one() {
        let store = store();
        let alert = Alert::new(Severity::Info, "once", Duration::from_secs(1));
        store.push(alert.clone());
        store.push(alert);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn dismissed_id_cannot_be_pushed_back() {
        let store = store();
        let alert = Alert::new(Severity::Info, "gone for good", Duration::from_secs(5));
        let id = store.push(alert.clone());
        assert!(store.dismiss(id));

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.push(alert);

        assert!(!store.contains(id));
        assert!(store.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn older_record_is_rejected_after_newer_one() {
        let store = store();
        let older = Alert::new(Severity::Success, "older", Duration::from_secs(5));
        let newer = Alert::new(Severity::Success, "newer", Duration::from_secs(5));
        store.push(newer);
        store.push(older.clone());
        assert!(!store.contains(older.id()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sticky_alert_survives_sweeps() {
        let store = store();
        let id = store.publish_for(Severity::Info, "sticky", Duration::MAX);
        let later = Instant::now() + Duration::from_secs(86_400);

        assert!(store.remove_expired(later).is_empty());
        assert!(store.contains(id));
        assert_eq!(store.snapshot()[0].remaining_fraction(later), 1.0);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let store = store();
        let order = Arc::new(Mutex::new(Vec::new()));
        let guards: Vec<ListenerGuard> = (1..=3)
            .map(|tag| {
                let sink = Arc::clone(&order);
                store.subscribe(move |_| sink.lock().unwrap().push(tag))
            })
            .collect();

        store.publish(Severity::Success, "ordered");
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
        drop(guards);
    }

    #[test]
    fn listener_removed_mid_round_still_gets_that_round() {
        let store = store();
        let second_guard: Arc<Mutex<Option<ListenerGuard>>> = Arc::new(Mutex::new(None));
        let second_calls = Arc::new(AtomicUsize::new(0));

        let slot = Arc::clone(&second_guard);
        let _first = store.subscribe(move |_| {
            // Unregister the second listener during delivery.
            slot.lock().unwrap().take();
        });
        let counter = Arc::clone(&second_calls);
        let guard = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        *second_guard.lock().unwrap() = Some(guard);

        store.publish(Severity::Warning, "first round");
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 1);

        store.publish(Severity::Warning, "second round");
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn global_returns_same_store() {
        assert!(Arc::ptr_eq(&global(), &global()));
    }
}
