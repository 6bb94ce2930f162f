// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The form sits at the bottom of a stack, the loading overlay above it and
//! the toasts on top so they stay readable while the overlay is up.

use super::{Message, Submission};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::loading::{self, LoadingOverlay};
use crate::ui::notifications::{toast, Kind, Manager};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notifications: &'a Manager,
    pub loading: &'a LoadingOverlay,
    pub submissions: u32,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let busy = ctx.loading.controller().is_busy();
    let submit = |label: &'static str, submission: Submission| {
        let mut btn = button(Text::new(label)).padding(spacing::XS);
        if !busy {
            btn = btn.on_press(Message::Submit(submission));
        }
        btn
    };

    let form_row = Row::new()
        .spacing(spacing::SM)
        .push(submit("Quick save", Submission::Quick))
        .push(submit("Slow save", Submission::Slow))
        .push(submit("Failing save", Submission::Failing));

    let notify_row = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new("Info")).on_press(Message::Notify(Kind::Info)))
        .push(button(Text::new("Warning")).on_press(Message::Notify(Kind::Warning)))
        .push(button(Text::new("Error")).on_press(Message::Notify(Kind::Error)))
        .push(button(Text::new("Clear all")).on_press(Message::DismissAll));

    let status = Text::new(format!(
        "{} submitted, {} visible, {} waiting",
        ctx.submissions,
        ctx.notifications.visible_count(),
        ctx.notifications.pending_count()
    ))
    .size(typography::BODY_SM);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Feedback demo").size(typography::TITLE_MD))
        .push(form_row)
        .push(notify_row)
        .push(status);
    if let Some(warning) = ctx.config_warning {
        column = column.push(Text::new(warning).size(typography::CAPTION));
    }

    let content = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(loading::view_overlay::<_, Message>(ctx.loading))
        .push(toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}
