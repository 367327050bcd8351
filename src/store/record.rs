// SPDX-License-Identifier: MPL-2.0
//! Alert records held by the store.
//!
//! Records are immutable once published: the only way to change the
//! active list is to remove a record.

use crate::config::defaults::DEFAULT_ALERT_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
///
/// Identifiers are drawn from a process-wide counter, so two alerts never
/// share an id even when published in the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(u64);

impl AlertId {
    /// Allocates the next identifier.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level, which picks the accent color and the default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Short lowercase label, used in logs and by the demo buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Default display duration for each severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityDurations {
    pub success: Duration,
    pub info: Duration,
    pub warning: Duration,
    pub error: Duration,
}

impl SeverityDurations {
    /// Uses the same duration for every severity.
    #[must_use]
    pub fn uniform(duration: Duration) -> Self {
        Self {
            success: duration,
            info: duration,
            warning: duration,
            error: duration,
        }
    }

    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Success => self.success,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

impl Default for SeverityDurations {
    fn default() -> Self {
        Self::uniform(Duration::from_millis(DEFAULT_ALERT_DURATION_MS))
    }
}

/// A single active alert.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    id: AlertId,
    severity: Severity,
    message: String,
    duration: Duration,
    created_at: Instant,
}

impl Alert {
    /// Creates a record stamped with the current instant.
    pub fn new(severity: Severity, message: impl Into<String>, duration: Duration) -> Self {
        Self::created_at(severity, message, duration, Instant::now())
    }

    /// Creates a record with an explicit creation instant.
    pub fn created_at(
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id: AlertId::next(),
            severity,
            message: message.into(),
            duration,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn creation_instant(&self) -> Instant {
        self.created_at
    }

    /// Instant at which the record's timer elapses.
    ///
    /// `None` when the duration runs past the clock's range; such a record
    /// never expires.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.created_at.checked_add(self.duration)
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.created_at))
    }

    /// Fraction of the display time still left, in `[0, 1]`.
    ///
    /// Drives the countdown bar: `1.0` at creation, `0.0` at expiry.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        if self.expires_at().is_none() {
            return 1.0;
        }
        let fraction = self.remaining(now).as_secs_f32() / self.duration.as_secs_f32();
        fraction.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|at| now >= at)
    }
}
