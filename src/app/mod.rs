// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the alert container in a window.
//!
//! The `App` struct owns the container and wires buttons to the
//! process-wide store. Alerts published from anywhere in the process
//! (including [`crate::alert`]) show up here.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config, ThemeMode};
use crate::store::{self, Severity, Store};
use crate::ui::container::{self, ContainerSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Delay of the simulated background operation.
const OPERATION_DELAY: Duration = Duration::from_millis(1500);

/// Gap between alerts of a burst.
const BURST_STEP: Duration = Duration::from_millis(300);

/// Root Iced application state.
pub struct App {
    store: Arc<Store>,
    alerts: container::State,
    config: Config,
    custom_message: String,
    operations: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("alerts", &self.store.len())
            .field("theme", &self.config.general.theme)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let store = store::global();
        store.set_default_durations(config.alerts.durations());

        let alerts =
            container::State::new(Arc::clone(&store), ContainerSettings::from(&config.alerts));

        if let Some(warning) = config_warning {
            store.publish(Severity::Warning, warning);
        }

        log::info!(
            "alert container ready at {:?}, showing up to {}",
            alerts.settings().position,
            alerts.settings().max_visible
        );

        let app = Self {
            store,
            alerts,
            config,
            custom_message: String::new(),
            operations: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Alerts".to_string()
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.alerts.subscription().map(Message::Alerts)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Alerts(message) => self.alerts.update(message),
            Message::Publish(severity) => {
                self.store.publish(severity, canned_message(severity));
            }
            Message::PublishText(severity, text) => {
                self.store.publish(severity, text);
            }
            Message::InputChanged(value) => self.custom_message = value,
            Message::SubmitCustom => {
                let text = self.custom_message.trim();
                if text.is_empty() {
                    self.store
                        .publish(Severity::Warning, "Please enter a message first!");
                } else {
                    self.store
                        .publish(Severity::Success, format!("Custom message: {text}"));
                    self.custom_message.clear();
                }
            }
            Message::StartOperation => {
                self.operations += 1;
                // Every third run fails so both outcomes are easy to see.
                let succeeds = self.operations % 3 != 0;
                self.store
                    .publish(Severity::Info, "Starting background operation...");
                return Task::perform(
                    async move {
                        tokio::time::sleep(OPERATION_DELAY).await;
                        succeeds
                    },
                    Message::OperationFinished,
                );
            }
            Message::OperationFinished(true) => {
                self.store
                    .publish(Severity::Success, "Background operation completed!");
            }
            Message::OperationFinished(false) => {
                self.store
                    .publish(Severity::Error, "Background operation failed!");
            }
            Message::Burst => return burst(),
            Message::ClearAll => self.store.clear(),
            Message::ToggleTheme => {
                self.config.general.theme = match self.config.general.theme {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                if let Err(err) = config::save(&self.config) {
                    log::warn!("failed to save config: {err}");
                    self.store
                        .publish(Severity::Error, format!("Could not save settings: {err}"));
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            alerts: &self.alerts,
            custom_message: &self.custom_message,
            active_count: self.store.len(),
            theme: self.config.general.theme,
        })
    }
}

/// Message shown by the per-severity buttons.
fn canned_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Operation completed successfully!",
        Severity::Info => "Here is something you might want to know.",
        Severity::Warning => "Please check your input before proceeding.",
        Severity::Error => "Something went wrong! Please try again.",
    }
}

/// Four alerts, one every `BURST_STEP`, to exercise stacking.
fn burst() -> Task<Message> {
    let steps = [
        (Severity::Success, "First alert"),
        (Severity::Warning, "Second alert"),
        (Severity::Error, "Third alert"),
        (Severity::Success, "Fourth alert"),
    ];

    Task::batch(steps.into_iter().zip(0u32..).map(|((severity, text), step)| {
        let delay = BURST_STEP * step;
        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
            },
            move |()| Message::PublishText(severity, text.to_string()),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_messages_are_not_empty() {
        for severity in Severity::ALL {
            assert!(!canned_message(severity).is_empty());
        }
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size is set");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
