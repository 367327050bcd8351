// SPDX-License-Identifier: MPL-2.0
//! Entry and exit transitions for toasts.
//!
//! A toast slides in from the screen edge while fading in, stays fully
//! visible, then fades out once its record leaves the store.

use std::time::{Duration, Instant};

/// Horizontal distance a toast travels while entering.
pub const SLIDE_DISTANCE: f32 = crate::ui::design_tokens::spacing::LG;

/// Lengths of the two transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub enter: Duration,
    pub exit: Duration,
}

/// Where a toast is in its on-screen life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering { since: Instant },
    Shown,
    Leaving { since: Instant },
}

impl Phase {
    /// Opacity factor in `[0, 1]`.
    #[must_use]
    pub fn visibility(self, now: Instant, timing: Timing) -> f32 {
        match self {
            Phase::Entering { since } => ease_out_cubic(progress(since, now, timing.enter)),
            Phase::Shown => 1.0,
            Phase::Leaving { since } => 1.0 - progress(since, now, timing.exit),
        }
    }

    /// How far the toast still sits from its resting place, in pixels.
    #[must_use]
    pub fn slide_offset(self, now: Instant, timing: Timing) -> f32 {
        match self {
            Phase::Entering { .. } => (1.0 - self.visibility(now, timing)) * SLIDE_DISTANCE,
            Phase::Shown | Phase::Leaving { .. } => 0.0,
        }
    }

    #[must_use]
    pub fn is_leaving(self) -> bool {
        matches!(self, Phase::Leaving { .. })
    }

    /// Moves `Entering` to `Shown` once the entry transition is over.
    #[must_use]
    pub fn settle(self, now: Instant, timing: Timing) -> Self {
        match self {
            Phase::Entering { since } if progress(since, now, timing.enter) >= 1.0 => Phase::Shown,
            other => other,
        }
    }

    /// Whether the exit transition has completed.
    #[must_use]
    pub fn is_gone(self, now: Instant, timing: Timing) -> bool {
        match self {
            Phase::Leaving { since } => progress(since, now, timing.exit) >= 1.0,
            Phase::Entering { .. } | Phase::Shown => false,
        }
    }
}

/// Linear progress of a transition started at `since`, in `[0, 1]`.
fn progress(since: Instant, now: Instant, length: Duration) -> f32 {
    if length.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
