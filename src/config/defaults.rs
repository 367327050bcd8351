// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Duration**: How long an alert stays on screen
//! - **Stacking**: How many toasts are rendered at once
//! - **Animation**: Entry/exit transition lengths and frame rate

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default display duration for every severity (in milliseconds).
pub const DEFAULT_ALERT_DURATION_MS: u64 = 2000;

/// Shortest display duration accepted from the config file.
pub const MIN_ALERT_DURATION_MS: u64 = 500;

/// Longest display duration accepted from the config file.
pub const MAX_ALERT_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Default number of toasts rendered at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

pub const MIN_MAX_VISIBLE: usize = 1;

pub const MAX_MAX_VISIBLE: usize = 20;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default slide/fade-in length (in milliseconds).
pub const DEFAULT_ENTER_MS: u64 = 200;

/// Default fade-out length (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 250;

/// Upper bound for either animation (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 2000;

/// Frame interval while toasts are on screen (~60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ALERT_DURATION_MS > 0);
    assert!(MAX_ALERT_DURATION_MS >= MIN_ALERT_DURATION_MS);
    assert!(DEFAULT_ALERT_DURATION_MS >= MIN_ALERT_DURATION_MS);
    assert!(DEFAULT_ALERT_DURATION_MS <= MAX_ALERT_DURATION_MS);

    assert!(MIN_MAX_VISIBLE > 0);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(DEFAULT_ENTER_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_ANIMATION_MS);
    // Animations must fit inside the shortest display time.
    assert!(DEFAULT_ENTER_MS < MIN_ALERT_DURATION_MS);

    assert!(FRAME_INTERVAL_MS > 0);
};
