// SPDX-License-Identifier: MPL-2.0
//! Background expiry for stores that have no container driving them.
//!
//! The on-screen container removes alerts when their countdown reaches
//! zero. Headless consumers (or apps that mount the container only on some
//! screens) can run this loop instead so records still leave on time.

use super::Store;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Default sweep period.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest accepted sweep period; smaller values are raised to it.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Sweeps `store` for expired alerts every `interval`, forever.
pub async fn run(store: Arc<Store>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval.max(MIN_SWEEP_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        store.remove_expired(Instant::now());
    }
}

/// Spawns [`run`] on the current tokio runtime.
///
/// Abort the returned handle to stop sweeping.
pub fn spawn(store: Arc<Store>, interval: Duration) -> JoinHandle<()> {
    if interval < MIN_SWEEP_INTERVAL {
        log::warn!(
            "alert sweep interval {} ms is too short, using {} ms",
            interval.as_millis(),
            MIN_SWEEP_INTERVAL.as_millis()
        );
    }
    log::debug!("starting alert expiry sweep every {} ms", interval.as_millis());
    tokio::spawn(run(store, interval))
}
