// SPDX-License-Identifier: MPL-2.0
//! Iced subscription that mirrors a [`Store`] into the UI event loop.
//!
//! A store listener pushes every change into a tokio channel; the
//! subscription stream yields the current list first, then each change.
//! The listener guard lives inside the stream, so tearing the subscription
//! down unregisters the listener.

use crate::store::{Alert, Store};
use iced::futures::stream::{self, BoxStream, StreamExt};
use iced::Subscription;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription identity: one stream per store instance.
#[derive(Debug, Clone)]
struct StoreId(Arc<Store>);

impl PartialEq for StoreId {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for StoreId {}

impl Hash for StoreId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

/// Emits the store's alert list on startup and after every change.
pub fn store_changes(store: &Arc<Store>) -> Subscription<Vec<Alert>> {
    Subscription::run_with(StoreId(Arc::clone(store)), snapshot_stream)
}

fn snapshot_stream(id: &StoreId) -> BoxStream<'static, Vec<Alert>> {
    let store = Arc::clone(&id.0);
    let (tx, rx) = mpsc::unbounded_channel();

    // Subscribe before reading the snapshot so no change slips in between.
    let guard = store.subscribe(move |alerts| {
        // The receiver is gone only when the subscription is shutting down.
        let _ = tx.send(alerts.to_vec());
    });
    let initial = store.snapshot();

    let updates = stream::unfold((rx, guard), |(mut rx, guard)| async move {
        rx.recv().await.map(|alerts| (alerts, (rx, guard)))
    });

    stream::once(async move { initial }).chain(updates).boxed()
}
