// SPDX-License-Identifier: MPL-2.0
//! Rendering of the board as an overlay.
//!
//! Each container becomes a column anchored to its screen position; the
//! columns are stacked on top of each other so they can be layered over the
//! application content.

use super::board::{Board, Container};
use super::toast::{Toast, ToastId};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{container, mouse_area, progress_bar, text, Column, Row, Stack, Text};
use iced::{alignment, mouse, Background, Border, Color, Element, Length, Theme};

/// Glyph shown on toasts that close on click.
const CLOSE_GLYPH: &str = "\u{00D7}";

/// Interactions emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Clicked(ToastId),
    Hovered(ToastId, bool),
}

/// Renders every container of the board, each anchored to its position.
pub fn overlay(board: &Board) -> Element<'_, Message> {
    if board.is_empty() {
        // Takes no space when nothing is attached
        return container(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'_, Message>> =
        board.containers().iter().map(view_container).collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_container(group: &Container) -> Element<'_, Message> {
    let position = group.position();
    let cards: Vec<Element<'_, Message>> = group.toasts().iter().map(view_toast).collect();

    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(position.horizontal());

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(position.horizontal())
        .align_y(position.vertical())
        .padding(spacing::MD)
        .into()
}

/// What a card draws and which interactions it reports.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Card {
    close_glyph: bool,
    progress: Option<f32>,
    on_press: Option<Message>,
    on_enter: Message,
    on_exit: Message,
}

impl Card {
    fn of(toast: &Toast) -> Self {
        let id = toast.id();
        Self {
            close_glyph: toast.can_close(),
            progress: toast.show_progress().then_some(toast.progress()),
            // A leaving toast no longer reacts to clicks
            on_press: (toast.can_close() && !toast.is_leaving()).then_some(Message::Clicked(id)),
            on_enter: Message::Hovered(id, true),
            on_exit: Message::Hovered(id, false),
        }
    }
}

/// Renders a single toast card.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let card = Card::of(toast);
    let alpha = toast.opacity();

    let message = Text::new(toast.text())
        .size(typography::BODY)
        .width(Length::Fill)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(message);

    if card.close_glyph {
        let glyph_style = move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha * opacity::OVERLAY_HOVER)),
        };
        header = header.push(
            Text::new(CLOSE_GLYPH)
                .size(typography::BODY_LG)
                .style(glyph_style),
        );
    }

    let mut body = Column::new().spacing(spacing::XS).push(header);

    if let Some(progress) = card.progress {
        body = body.push(
            progress_bar(0.0..=1.0, progress)
                .girth(sizing::PROGRESS_HEIGHT)
                .style(move |theme: &Theme| progress_style(theme, alpha)),
        );
    }

    let frame = container(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, alpha));

    let area = mouse_area(frame)
        .on_enter(card.on_enter)
        .on_exit(card.on_exit);

    match card.on_press {
        Some(message) => area
            .on_press(message)
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => area.into(),
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    let background = with_alpha(palette.background.base.color, alpha * opacity::SURFACE);

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: with_alpha(palette.primary.base.color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, alpha * opacity::OVERLAY_SUBTLE),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the countdown bar.
fn progress_style(theme: &Theme, alpha: f32) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(with_alpha(
            palette::GRAY_400,
            alpha * opacity::OVERLAY_SUBTLE,
        )),
        bar: Background::Color(with_alpha(theme.palette().primary, alpha)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::options::Options;
    use std::time::Instant;

    #[test]
    fn toast_container_style_fades_with_alpha() {
        let theme = Theme::Dark;
        let opaque = toast_container_style(&theme, 1.0);
        let faded = toast_container_style(&theme, 0.5);

        assert!(opaque.background.is_some());
        assert!(faded.border.color.a < opaque.border.color.a);
        assert_eq!(opaque.border.width, border::WIDTH_MD);
    }

    #[test]
    fn transparent_toast_has_transparent_bar() {
        let style = progress_style(&Theme::Light, 0.0);
        assert!(matches!(style.bar, Background::Color(color) if color.a == 0.0));
    }

    #[test]
    fn with_alpha_scales_existing_alpha() {
        let color = with_alpha(
            Color {
                a: 0.5,
                ..palette::WHITE
            },
            0.5,
        );
        assert_eq!(color.a, 0.25);
    }

    #[test]
    fn closable_card_has_glyph_and_click() {
        let mut board = Board::new();
        let id = board.show(Options::new("a"), Instant::now());

        let card = Card::of(board.get(id).unwrap());
        assert!(card.close_glyph);
        assert_eq!(card.on_press, Some(Message::Clicked(id)));
    }

    #[test]
    fn locked_card_has_no_glyph_and_ignores_clicks() {
        let mut board = Board::new();
        let id = board.show(Options::new("a").can_close(false), Instant::now());

        let card = Card::of(board.get(id).unwrap());
        assert!(!card.close_glyph);
        assert_eq!(card.on_press, None);
    }

    #[test]
    fn leaving_card_stops_accepting_clicks() {
        let now = Instant::now();
        let mut board = Board::new();
        let id = board.show(Options::new("a"), now);
        board.remove(id, now);

        let card = Card::of(board.get(id).unwrap());
        assert!(card.close_glyph);
        assert_eq!(card.on_press, None);
    }

    #[test]
    fn progress_bar_follows_show_progress() {
        let now = Instant::now();
        let mut board = Board::new();
        let with_bar = board.show(Options::new("a"), now);
        let without_bar = board.show(Options::new("b").show_progress(false), now);

        assert_eq!(Card::of(board.get(with_bar).unwrap()).progress, Some(1.0));
        assert_eq!(Card::of(board.get(without_bar).unwrap()).progress, None);
    }

    #[test]
    fn card_reports_hover_for_its_own_toast() {
        let mut board = Board::new();
        let id = board.show(Options::new("a"), Instant::now());

        let card = Card::of(board.get(id).unwrap());
        assert_eq!(card.on_enter, Message::Hovered(id, true));
        assert_eq!(card.on_exit, Message::Hovered(id, false));
    }
}
