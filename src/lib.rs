// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient toast notifications for Iced applications.
//!
//! Toasts are grouped in containers anchored to a screen position, can close
//! themselves after a delay while a progress bar counts down, and can be
//! dismissed by a click. The crate also ships a small demo application.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod toasts;
pub mod ui;
