// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::store::Severity;
use crate::ui::container;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Alerts(container::Message),
    /// Publish a canned alert of the given severity.
    Publish(Severity),
    /// Publish a specific message.
    PublishText(Severity, String),
    /// Text typed into the custom message field.
    InputChanged(String),
    /// Publish whatever is in the custom message field.
    SubmitCustom,
    /// Start a simulated background operation.
    StartOperation,
    /// The simulated operation finished.
    OperationFinished(bool),
    /// Publish several alerts in quick succession.
    Burst,
    ClearAll,
    ToggleTheme,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ALERTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
