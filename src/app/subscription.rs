// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::toasts::Board;
use iced::{time, Subscription};

/// Creates the tick subscription driving toast timers.
///
/// Ticks fast while a progress bar or a transition is visible, slowly while
/// only countdowns are pending, and not at all when the board is empty.
pub fn create_tick_subscription(board: &Board) -> Subscription<Message> {
    match board.tick_interval() {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}
