// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with kind-colored accents and optional dismiss buttons.

use super::config::Position;
use super::manager::{Manager, Message};
use super::notification::{Kind, Notification, State};
use crate::time::Clock;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast notification.
pub fn view(notification: &Notification) -> Element<'_, Message> {
    let accent_color = notification.kind().color();
    // Fade while the exit animation window runs.
    let alpha = if notification.state() == State::Dismissing {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::OPAQUE
    };

    let icon_widget = Text::new(kind_glyph(notification.kind()))
        .size(sizing::ICON_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..accent_color
            }),
        });

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = notification.title() {
        body = body.push(
            Text::new(title)
                .size(typography::BODY_LG)
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        );
    }
    body = body.push(
        Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| faded_text(theme, alpha)),
    );

    // Layout: [icon] [title/message] [dismiss]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if notification.is_dismissible() {
        let mut dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        if notification.state() == State::Visible {
            dismiss_button = dismiss_button.on_press(Message::Dismiss(notification.id()));
        }
        content = content.push(dismiss_button);
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
        .into()
}

/// Renders the toast overlay with all visible notifications.
///
/// Toasts are stacked in the corner given by the queue's [`Position`]. The
/// newest toast sits closest to the screen edge it is anchored to.
pub fn view_overlay<C: Clock>(manager: &Manager<C>) -> Element<'_, Message> {
    let position = manager.config().position;
    let mut toasts: Vec<Element<'_, Message>> = manager.visible().map(view).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    if position.is_top() {
        toasts.reverse();
    }

    let (align_x, align_y) = alignment_for(position);
    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(align_x);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
}

/// Returns the glyph shown next to the message.
fn kind_glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Warning => "⚠",
        Kind::Info => "ℹ",
    }
}

fn alignment_for(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismissing_toast_is_faded() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, opacity::OVERLAY_MEDIUM);
        assert!((style.border.color.a - opacity::OVERLAY_MEDIUM).abs() < f32::EPSILON);
    }

    #[test]
    fn every_kind_has_a_distinct_glyph() {
        let mut glyphs: Vec<_> = Kind::ALL.iter().map(|kind| kind_glyph(*kind)).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Kind::ALL.len());
    }

    #[test]
    fn alignment_follows_position() {
        assert_eq!(
            alignment_for(Position::TopRight),
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        );
        assert_eq!(
            alignment_for(Position::BottomCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        );
        assert_eq!(
            alignment_for(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn overlay_renders_for_empty_and_busy_queue() {
        let mut manager = Manager::new();
        let _ = view_overlay(&manager);
        manager.warning("low disk space");
        let _ = view_overlay(&manager);
    }
}
