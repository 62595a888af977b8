// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toasts::{self, Position};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Click or hover on a toast card.
    Toast(toasts::Message),
    /// Periodic tick driving toast timers and transitions.
    Tick(Instant),
    DraftChanged(String),
    PositionSelected(Position),
    /// Auto-close delay in seconds, `0.0` disables it.
    AutoCloseChanged(f32),
    ShowProgressToggled(bool),
    CanCloseToggled(bool),
    PauseOnHoverToggled(bool),
    /// Show a toast with the draft text and the current options.
    Show,
    /// Apply the current options to the most recent toast.
    UpdateLast,
    RemoveLast,
    ClearAll,
    /// Persist the current options as defaults.
    SaveDefaults,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Config file to use instead of the platform default.
    pub config_path: Option<PathBuf>,
    pub position: Option<Position>,
    /// Auto-close delay override in milliseconds (`0` disables).
    pub auto_close_ms: Option<u64>,
    pub no_progress: bool,
    pub no_close: bool,
    pub pause_on_hover: bool,
    pub theme_mode: Option<ThemeMode>,
    /// Debug-level logging unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}
