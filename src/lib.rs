// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` is a small toast notification kit for the Iced GUI framework.
//!
//! A process-wide [`store`] keeps the ordered list of active alerts and
//! notifies subscribers on every change; the [`ui::container`] component
//! renders that list as animated toasts with a countdown bar and removes
//! each alert when its time is up.

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;
