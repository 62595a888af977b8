// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! A control panel on the left edits the options of the next toast; the
//! toast overlay is layered over the whole window.

use super::Message;
use crate::config::ToastDefaults;
use crate::toasts::{self, Board, Position};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{
    button, pick_list, slider, text_input, toggler, Column, Container, Row, Space, Stack, Text,
};
use iced::{Alignment, Element, Length};

/// Upper bound of the auto-close slider, in seconds.
const MAX_SLIDER_SECONDS: f32 = 20.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub board: &'a Board,
    pub options: &'a ToastDefaults,
    pub draft: &'a str,
    pub has_last_toast: bool,
    pub shown: usize,
    pub closed: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(controls(&ctx))
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::LG);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(panel)
        .push(toasts::view::overlay(ctx.board).map(Message::Toast))
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options = ctx.options;

    let draft = text_input("Message", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Show)
        .padding(spacing::XS);

    let position = pick_list(
        Position::ALL,
        Some(options.position),
        Message::PositionSelected,
    )
    .padding(spacing::XS);

    let seconds = options.auto_close_ms as f32 / 1000.0;
    let auto_close_label = if options.auto_close_ms == 0 {
        "off".to_string()
    } else {
        format!("{seconds:.1} s")
    };
    let auto_close = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(
            slider(
                0.0..=MAX_SLIDER_SECONDS,
                seconds.min(MAX_SLIDER_SECONDS),
                Message::AutoCloseChanged,
            )
            .step(0.5),
        )
        .push(Text::new(auto_close_label).size(typography::CAPTION));

    let last_action = |label: &'a str, message: Message| {
        let mut action = button(Text::new(label).size(typography::BODY));
        if ctx.has_last_toast {
            action = action.on_press(message);
        }
        action
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Show").size(typography::BODY)).on_press(Message::Show))
        .push(last_action("Update last", Message::UpdateLast))
        .push(last_action("Remove last", Message::RemoveLast));

    let housekeeping = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Clear all").size(typography::BODY)).on_press(Message::ClearAll))
        .push(
            button(Text::new("Save as defaults").size(typography::BODY))
                .on_press(Message::SaveDefaults),
        );

    let counters = Text::new(format!(
        "{} shown, {} closed, {} attached",
        ctx.shown,
        ctx.closed,
        ctx.board.len()
    ))
    .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Toasts").size(typography::TITLE_MD))
        .push(draft)
        .push(labeled("Position", position.into()))
        .push(labeled("Auto-close", auto_close.into()))
        .push(toggle_row(
            "Progress bar",
            options.show_progress,
            Message::ShowProgressToggled,
        ))
        .push(toggle_row(
            "Click to close",
            options.can_close,
            Message::CanCloseToggled,
        ))
        .push(toggle_row(
            "Pause on hover",
            options.pause_on_hover,
            Message::PauseOnHoverToggled,
        ))
        .push(actions)
        .push(housekeeping)
        .push(counters)
        .into()
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(control)
        .into()
}

fn toggle_row<'a>(
    label: &'a str,
    value: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggler(value).on_toggle(on_toggle).size(20.0))
        .into()
}
