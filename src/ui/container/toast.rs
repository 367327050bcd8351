// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a single alert.
//!
//! A toast is a severity-colored card holding the message, a close button
//! and a countdown bar that shrinks to nothing at the alert's expiry.

use super::animation::{Timing, SLIDE_DISTANCE};
use super::{Entry, Message};
use crate::config::Position;
use crate::store::Severity;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};
use std::time::Instant;

/// Width available to the countdown bar inside a toast.
const COUNTDOWN_TRACK_WIDTH: f32 = sizing::TOAST_WIDTH - 2.0 * spacing::SM;

/// Accent color for a severity.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Renders one toast at its current animation state.
pub fn view(entry: &Entry, now: Instant, timing: Timing, position: Position) -> Element<'_, Message> {
    let alert = entry.alert();
    let visibility = entry.phase().visibility(now, timing);
    let accent = severity_color(alert.severity());
    let text_color = faded(palette::WHITE, visibility);

    let message = Text::new(alert.message())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    let dismiss = button(
        Text::new("×")
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            }),
    )
    .on_press(Message::Dismiss(alert.id()))
    .padding(Padding::from([0.0, spacing::XXS]))
    .style(move |theme, status| dismiss_button_style(theme, status, visibility));

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    let remaining = alert.remaining_fraction(now);
    let countdown = Container::new(text(""))
        .width(Length::Fixed(countdown_width(remaining)))
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(move |_theme: &Theme| countdown_style(visibility));

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(countdown),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH))
    .padding(spacing::SM)
    .style(move |_theme: &Theme| toast_container_style(accent, visibility));

    // The card rests SLIDE_DISTANCE away from the edge and starts at the edge.
    let inset = SLIDE_DISTANCE - entry.phase().slide_offset(now, timing);
    let padding = if position.is_right() {
        Padding {
            right: inset,
            ..Padding::ZERO
        }
    } else {
        Padding {
            left: inset,
            ..Padding::ZERO
        }
    };

    Container::new(card).padding(padding).into()
}

/// Width of the countdown bar for a remaining fraction.
fn countdown_width(remaining: f32) -> f32 {
    COUNTDOWN_TRACK_WIDTH * remaining.clamp(0.0, 1.0)
}

fn faded(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(accent: Color, visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(accent, visibility))),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::BLACK
                },
                visibility,
            ),
            ..shadow::MD
        },
        text_color: Some(faded(palette::WHITE, visibility)),
        ..Default::default()
    }
}

/// Style function for the countdown bar.
fn countdown_style(visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            visibility,
        ))),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, visibility: f32) -> button::Style {
    let hover = |alpha: f32| {
        Some(Background::Color(faded(
            Color {
                a: alpha,
                ..palette::BLACK
            },
            visibility,
        )))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: faded(palette::WHITE, visibility),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
