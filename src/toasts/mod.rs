// SPDX-License-Identifier: MPL-2.0
//! Toast notifications grouped in position-keyed containers.
//!
//! A toast appears in a corner of the window, optionally closes itself after
//! a delay while a progress bar counts down, and can be dismissed by a click.
//!
//! # Components
//!
//! - [`position`] - Screen anchors shared by toasts and containers
//! - [`options`] - Construction options, partial updates and defaults
//! - [`countdown`] - Pausable auto-close timer
//! - [`toast`] - A single toast element and its lifecycle phase
//! - [`board`] - Containers and the toast lifecycle operations
//! - [`view`] - Iced overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toasts::{Board, Options, Position, Update};
//! use std::time::Instant;
//!
//! let mut board = Board::new();
//! let id = board.show(Options::new("Saved").position(Position::BottomRight), Instant::now());
//!
//! // Later, from the update loop
//! board.update(id, Update::new().text("Saved twice"), Instant::now());
//! board.tick(Instant::now());
//!
//! // In the view function, layer the overlay over the content
//! let overlay = iced_toast::toasts::view::overlay(&board).map(Message::Toast);
//! ```

pub mod board;
pub mod countdown;
pub mod options;
pub mod position;
pub mod toast;
pub mod view;

pub use board::{Board, Container, IDLE_TICK, PROGRESS_TICK};
pub use countdown::Countdown;
pub use options::{AutoClose, OnClose, Options, Update, DEFAULT_AUTO_CLOSE};
pub use position::Position;
pub use toast::{Phase, Toast, ToastId, TRANSITION};
pub use view::Message;
