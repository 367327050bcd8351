// SPDX-License-Identifier: MPL-2.0
//! On-screen alert container.
//!
//! The container mirrors a [`Store`] and renders its alerts as a stack of
//! toasts anchored to a screen corner. Each toast animates in, shows a
//! countdown bar that empties at the alert's expiry, asks the store to
//! remove the alert when the countdown ends, and animates out.
//!
//! # Components
//!
//! - [`animation`] - Entry/exit phases and easing
//! - [`toast`] - Rendering of a single toast
//! - [`bridge`] - Store-to-subscription plumbing
//!
//! # Usage
//!
//! ```ignore
//! use iced_alerts::store;
//! use iced_alerts::ui::container::{self, ContainerSettings};
//!
//! let alerts = container::State::new(store::global(), ContainerSettings::default());
//!
//! // update:       alerts.update(message)
//! // view:         alerts.view().map(Message::Alerts)
//! // subscription: alerts.subscription().map(Message::Alerts)
//! ```

pub mod animation;
pub mod bridge;
pub mod toast;

use crate::config::{AlertsConfig, Position, FRAME_INTERVAL_MS};
use crate::store::{Alert, AlertId, Store};
use crate::ui::design_tokens::spacing;
use animation::{Phase, Timing};
use iced::widget::{Column, Container};
use iced::{alignment, time, Element, Length, Padding, Subscription};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Messages driving the container.
#[derive(Debug, Clone)]
pub enum Message {
    /// The store's alert list changed.
    StoreChanged(Vec<Alert>),
    /// Animation frame.
    Tick(Instant),
    /// The user closed a toast.
    Dismiss(AlertId),
}

/// Placement, stacking and animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSettings {
    pub position: Position,
    /// Maximum number of toasts rendered at once.
    pub max_visible: usize,
    pub timing: Timing,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self::from(&AlertsConfig::default())
    }
}

impl From<&AlertsConfig> for ContainerSettings {
    fn from(config: &AlertsConfig) -> Self {
        Self {
            position: config.position(),
            max_visible: config.max_visible(),
            timing: Timing {
                enter: config.enter_duration(),
                exit: config.exit_duration(),
            },
        }
    }
}

/// An alert together with its animation phase.
#[derive(Debug, Clone)]
pub struct Entry {
    alert: Alert,
    phase: Phase,
}

impl Entry {
    #[must_use]
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Container state.
#[derive(Debug)]
pub struct State {
    store: Arc<Store>,
    entries: Vec<Entry>,
    settings: ContainerSettings,
    /// Clock reading of the latest frame; `view` renders against it.
    now: Instant,
}

impl State {
    /// Creates a container seeded with the store's current alerts.
    ///
    /// Alerts already present are shown without an entry animation.
    pub fn new(store: Arc<Store>, settings: ContainerSettings) -> Self {
        let entries = store
            .snapshot()
            .into_iter()
            .map(|alert| Entry {
                alert,
                phase: Phase::Shown,
            })
            .collect();

        Self {
            store,
            entries,
            settings,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> ContainerSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: ContainerSettings) {
        self.settings = settings;
    }

    /// All tracked entries in display order, leaving ones included.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entries that `view` renders.
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().take(self.settings.max_visible)
    }

    /// Returns whether anything is on screen or animating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::StoreChanged(alerts) => self.reconcile(alerts, Instant::now()),
            Message::Tick(now) => {
                self.advance(now);
            }
            Message::Dismiss(id) => self.dismiss(id, Instant::now()),
        }
    }

    /// Brings the entries in line with a store snapshot.
    ///
    /// New alerts start entering; alerts no longer in the store start leaving.
    pub fn reconcile(&mut self, alerts: Vec<Alert>, now: Instant) {
        let active: HashSet<AlertId> = alerts.iter().map(Alert::id).collect();
        for entry in &mut self.entries {
            if !entry.phase.is_leaving() && !active.contains(&entry.alert.id()) {
                entry.phase = Phase::Leaving { since: now };
            }
        }

        let known: HashSet<AlertId> = self.entries.iter().map(|e| e.alert.id()).collect();
        self.entries.extend(
            alerts
                .into_iter()
                .filter(|alert| !known.contains(&alert.id()))
                .map(|alert| Entry {
                    alert,
                    phase: Phase::Entering { since: now },
                }),
        );
    }

    /// Advances animations to `now` and retires expired alerts.
    ///
    /// Returns the ids whose countdown ran out on this frame.
    pub fn advance(&mut self, now: Instant) -> Vec<AlertId> {
        self.now = now;
        let timing = self.settings.timing;

        let mut expired = Vec::new();
        for entry in &mut self.entries {
            entry.phase = entry.phase.settle(now, timing);
            if !entry.phase.is_leaving() && entry.alert.is_expired(now) {
                entry.phase = Phase::Leaving { since: now };
                expired.push(entry.alert.id());
            }
        }

        for id in &expired {
            self.store.dismiss(*id);
        }

        self.entries.retain(|entry| !entry.phase.is_gone(now, timing));
        expired
    }

    /// Closes a toast: starts its exit and removes it from the store.
    pub fn dismiss(&mut self, id: AlertId, now: Instant) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.alert.id() == id && !e.phase.is_leaving())
        {
            entry.phase = Phase::Leaving { since: now };
        }
        self.store.dismiss(id);
    }

    /// Renders the toast stack anchored to the configured corner.
    pub fn view(&self) -> Element<'_, Message> {
        let position = self.settings.position;
        let toasts = self
            .visible_entries()
            .map(|entry| toast::view(entry, self.now, self.settings.timing, position));

        let horizontal = if position.is_right() {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        };
        let vertical = if position.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        };

        let stack = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(Padding {
                top: spacing::MD,
                bottom: spacing::MD,
                ..Padding::ZERO
            })
            .into()
    }

    /// Store updates, plus animation frames while anything is on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        let changes = bridge::store_changes(&self.store).map(Message::StoreChanged);

        if self.is_active() {
            let frames =
                time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick);
            Subscription::batch([changes, frames])
        } else {
            changes
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::store::global(), ContainerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Severity;

    fn settings() -> ContainerSettings {
        ContainerSettings {
            position: Position::TopRight,
            max_visible: 3,
            timing: Timing {
                enter: Duration::from_millis(100),
                exit: Duration::from_millis(100),
            },
        }
    }

    fn push_at(store: &Store, message: &str, duration_ms: u64, at: Instant) -> AlertId {
        store.push(Alert::created_at(
            Severity::Success,
            message,
            Duration::from_millis(duration_ms),
            at,
        ))
    }

    #[test]
    fn new_container_is_seeded_from_store() {
        let store = Arc::new(Store::default());
        store.publish(Severity::Info, "a");
        store.publish(Severity::Info, "b");

        let state = State::new(Arc::clone(&store), settings());
        let phases: Vec<Phase> = state.entries().map(Entry::phase).collect();
        assert_eq!(phases, vec![Phase::Shown, Phase::Shown]);
    }

    #[test]
    fn reconcile_appends_new_alerts_as_entering() {
        let store = Arc::new(Store::default());
        let mut state = State::new(Arc::clone(&store), settings());
        let now = Instant::now();

        let a = store.publish(Severity::Success, "a");
        let b = store.publish(Severity::Error, "b");
        state.reconcile(store.snapshot(), now);

        let ids: Vec<AlertId> = state.entries().map(|e| e.alert().id()).collect();
        assert_eq!(ids, vec![a, b]);
        assert!(state
            .entries()
            .all(|e| e.phase() == Phase::Entering { since: now }));
    }

    #[test]
    fn sticky_alert_stays_shown_across_frames() {
        let store = Arc::new(Store::default());
        let start = Instant::now();
        let id = store.publish_for(Severity::Info, "sticky", Duration::MAX);
        let mut state = State::new(Arc::clone(&store), settings());

        assert!(state.advance(start + Duration::from_secs(3600)).is_empty());
        assert!(store.contains(id));
        assert_eq!(state.entries().next().map(Entry::phase), Some(Phase::Shown));
    }

    #[test]
    fn reconcile_marks_removed_alerts_as_leaving() {
        let store = Arc::new(Store::default());
        let a = store.publish(Severity::Success, "a");
        let b = store.publish(Severity::Success, "b");
        let mut state = State::new(Arc::clone(&store), settings());

        store.dismiss(a);
        let now = Instant::now();
        state.reconcile(store.snapshot(), now);

        let phases: Vec<(AlertId, Phase)> =
            state.entries().map(|e| (e.alert().id(), e.phase())).collect();
        assert_eq!(
            phases,
            vec![(a, Phase::Leaving { since: now }), (b, Phase::Shown)]
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let store = Arc::new(Store::default());
        let mut state = State::new(Arc::clone(&store), settings());
        let now = Instant::now();
        store.publish(Severity::Warning, "w");

        state.reconcile(store.snapshot(), now);
        state.reconcile(store.snapshot(), now + Duration::from_millis(5));
        assert_eq!(state.entries().count(), 1);
        assert_eq!(
            state.entries().next().map(Entry::phase),
            Some(Phase::Entering { since: now })
        );
    }

    #[test]
    fn advance_settles_entering_toasts() {
        let store = Arc::new(Store::default());
        let mut state = State::new(Arc::clone(&store), settings());
        let now = Instant::now();
        push_at(&store, "a", 5_000, now);
        state.reconcile(store.snapshot(), now);

        state.advance(now + Duration::from_millis(50));
        assert!(matches!(
            state.entries().next().map(Entry::phase),
            Some(Phase::Entering { .. })
        ));

        state.advance(now + Duration::from_millis(100));
        assert_eq!(state.entries().next().map(Entry::phase), Some(Phase::Shown));
    }

    #[test]
    fn countdown_end_removes_alert_from_store() {
        let store = Arc::new(Store::default());
        let start = Instant::now();
        let short = push_at(&store, "short", 1_000, start);
        let long = push_at(&store, "long", 5_000, start);
        let mut state = State::new(Arc::clone(&store), settings());

        assert!(state.advance(start + Duration::from_millis(999)).is_empty());
        assert!(store.contains(short));

        let expired = state.advance(start + Duration::from_millis(1_000));
        assert_eq!(expired, vec![short]);
        assert!(!store.contains(short));
        assert!(store.contains(long));
    }

    #[test]
    fn leaving_entries_are_dropped_after_exit_animation() {
        let store = Arc::new(Store::default());
        let start = Instant::now();
        push_at(&store, "short", 1_000, start);
        let mut state = State::new(Arc::clone(&store), settings());

        let expiry = start + Duration::from_millis(1_000);
        state.advance(expiry);
        assert_eq!(state.entries().count(), 1, "still fading out");

        state.advance(expiry + Duration::from_millis(100));
        assert!(!state.is_active());
    }

    #[test]
    fn dismiss_removes_from_store_and_starts_exit() {
        let store = Arc::new(Store::default());
        let id = store.publish(Severity::Error, "boom");
        let mut state = State::new(Arc::clone(&store), settings());
        let now = Instant::now();

        state.dismiss(id, now);
        assert!(!store.contains(id));
        assert_eq!(
            state.entries().next().map(Entry::phase),
            Some(Phase::Leaving { since: now })
        );

        // The store's change notification must not restart the exit.
        state.reconcile(store.snapshot(), now + Duration::from_millis(30));
        assert_eq!(
            state.entries().next().map(Entry::phase),
            Some(Phase::Leaving { since: now })
        );
    }

    #[test]
    fn visible_entries_respect_max_visible_in_fifo_order() {
        let store = Arc::new(Store::default());
        let ids: Vec<AlertId> = (0..5)
            .map(|i| store.publish(Severity::Info, format!("n{i}")))
            .collect();
        let state = State::new(Arc::clone(&store), settings());

        let visible: Vec<AlertId> = state.visible_entries().map(|e| e.alert().id()).collect();
        assert_eq!(visible, ids[..3].to_vec());
    }

    #[test]
    fn update_routes_dismiss_message() {
        let store = Arc::new(Store::default());
        let id = store.publish(Severity::Success, "ok");
        let mut state = State::new(Arc::clone(&store), settings());

        state.update(Message::Dismiss(id));
        assert!(store.is_empty());
        assert!(state.entries().all(|e| e.phase().is_leaving()));
    }

    #[test]
    fn settings_follow_config() {
        let config = AlertsConfig {
            position: Some(Position::BottomLeft),
            max_visible: Some(2),
            enter_ms: Some(0),
            ..AlertsConfig::default()
        };
        let settings = ContainerSettings::from(&config);
        assert_eq!(settings.position, Position::BottomLeft);
        assert_eq!(settings.max_visible, 2);
        assert_eq!(settings.timing.enter, Duration::ZERO);
    }
}
