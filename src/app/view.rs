// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::config::ThemeMode;
use crate::store::Severity;
use crate::ui::container::{self, toast::severity_color};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, text, text_input, Column, Container, Row, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub alerts: &'a container::State,
    pub custom_message: &'a str,
    pub active_count: usize,
    pub theme: ThemeMode,
}

/// Renders the demo controls with the alert container layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Container::new(controls(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL);

    Stack::new()
        .push(content)
        .push(ctx.alerts.view().map(Message::Alerts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let severity_buttons = Severity::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, severity| {
            row.push(severity_button(severity))
        });

    let custom = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input("Enter a custom message...", ctx.custom_message)
                .on_input(Message::InputChanged)
                .on_submit(Message::SubmitCustom)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .push(button(text("Show custom alert")).on_press(Message::SubmitCustom));

    let scenarios = Row::new()
        .spacing(spacing::XS)
        .push(button(text("Simulate operation")).on_press(Message::StartOperation))
        .push(button(text("Trigger multiple alerts")).on_press(Message::Burst))
        .push(button(text("Clear all")).on_press(Message::ClearAll));

    let theme_label = match ctx.theme {
        ThemeMode::Light => "Dark theme",
        ThemeMode::Dark => "Light theme",
    };

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new("Iced Alerts").size(typography::TITLE_LG))
        .push(section("Basic alerts", severity_buttons.into()))
        .push(section("Custom message", custom.into()))
        .push(section("Scenarios", scenarios.into()))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(button(text(theme_label)).on_press(Message::ToggleTheme))
                .push(
                    Text::new(format!("{} active", ctx.active_count)).size(typography::CAPTION),
                ),
        )
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::BODY_LG))
        .push(body)
        .into()
}

fn severity_button<'a>(severity: Severity) -> Element<'a, Message> {
    let accent = severity_color(severity);
    button(Text::new(format!("Show {severity}")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([0.0, spacing::SM])
        .on_press(Message::Publish(severity))
        .style(move |theme, status| severity_button_style(theme, status, accent))
        .into()
}

fn severity_button_style(_theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..accent
        },
        button::Status::Active | button::Status::Disabled => accent,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_button_style_uses_accent() {
        let style = severity_button_style(
            &Theme::Dark,
            button::Status::Active,
            palette::WARNING_500,
        );
        assert_eq!(style.background, Some(Background::Color(palette::WARNING_500)));
        assert_eq!(style.text_color, palette::WHITE);
    }
}
