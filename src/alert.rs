// SPDX-License-Identifier: MPL-2.0
//! One-line helpers that publish onto the process-wide store.
//!
//! ```no_run
//! use iced_alerts::alert;
//!
//! alert::success("Profile saved");
//! alert::error("Could not reach the server");
//! ```

use crate::store::{self, AlertId, Severity};

/// Publishes a success alert.
pub fn success(message: impl Into<String>) -> AlertId {
    store::global().publish(Severity::Success, message)
}

/// Publishes an informational alert.
pub fn info(message: impl Into<String>) -> AlertId {
    store::global().publish(Severity::Info, message)
}

/// Publishes a warning alert.
pub fn warning(message: impl Into<String>) -> AlertId {
    store::global().publish(Severity::Warning, message)
}

/// Publishes an error alert.
pub fn error(message: impl Into<String>) -> AlertId {
    store::global().publish(Severity::Error, message)
}
