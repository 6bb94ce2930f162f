// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the loading overlay.

use super::overlay::{LoadingOverlay, OverlayPhase};
use super::spinner::{rotation_after, Spinner};
use crate::time::Clock;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::time::Duration;

/// Renders the overlay on top of the whole window, or an empty element
/// when it is hidden.
pub fn view_overlay<'a, C: Clock, Message: 'static>(
    overlay: &'a LoadingOverlay<C>,
) -> Element<'a, Message> {
    let alpha = match overlay.phase() {
        OverlayPhase::Hidden => {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }
        OverlayPhase::Visible => opacity::OPAQUE,
        OverlayPhase::Exiting => opacity::OVERLAY_MEDIUM,
    };

    let controller = overlay.controller();
    let elapsed = controller.shown_at().map_or(Duration::ZERO, |shown_at| {
        controller.clock().now().saturating_duration_since(shown_at)
    });
    let spinner = Spinner::new(
        Color {
            a: alpha,
            ..palette::PRIMARY_400
        },
        rotation_after(elapsed),
    );

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner.into_element());
    if !overlay.message().is_empty() {
        content = content.push(
            Text::new(overlay.message())
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: alpha,
                        ..palette::WHITE
                    }),
                }),
        );
    }

    let card = Container::new(content)
        .padding(spacing::LG)
        .style(move |_theme: &Theme| card_style(alpha));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| backdrop_style(alpha))
        .into()
}

fn backdrop_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn card_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG * alpha,
            ..palette::GRAY_900
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
