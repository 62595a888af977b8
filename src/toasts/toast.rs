// SPDX-License-Identifier: MPL-2.0
//! A single toast element and its timers.
//!
//! The visual state mirrors what a stylesheet would toggle on the element:
//! whether it is shown, whether it carries a progress bar (and how full the
//! bar is), and whether clicking it closes it.

use super::countdown::Countdown;
use super::options::{AutoClose, OnClose, Update};
use super::position::Position;
use std::time::{Duration, Instant};

/// Length of the fade-in and fade-out transitions.
pub const TRANSITION: Duration = Duration::from_millis(250);

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of the element while it is attached to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached but not revealed yet; revealed on the next frame.
    Entering,
    /// Visible, fading in for the first [`TRANSITION`].
    Shown { since: Instant },
    /// Exit transition running; detached once it completes.
    Leaving { since: Instant },
}

#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    text: String,
    position: Position,
    auto_close: AutoClose,
    countdown: Option<Countdown>,
    show_progress: bool,
    progress: f32,
    can_close: bool,
    pause_on_hover: bool,
    hovered: bool,
    phase: Phase,
    opacity: f32,
    on_close: Option<OnClose>,
}

impl Toast {
    /// A bare element: no text, no timers, no affordances.
    pub(crate) fn new(position: Position) -> Self {
        Self {
            id: ToastId::new(),
            text: String::new(),
            position,
            auto_close: AutoClose::Disabled,
            countdown: None,
            show_progress: false,
            progress: 1.0,
            can_close: false,
            pause_on_hover: false,
            hovered: false,
            phase: Phase::Entering,
            opacity: 0.0,
            on_close: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn auto_close(&self) -> AutoClose {
        self.auto_close
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// Fill level of the progress bar, `1.0` when full.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn can_close(&self) -> bool {
        self.can_close
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the element carries its "shown" state.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Shown { .. })
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the next tick will change something visible.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.phase {
            Phase::Entering | Phase::Leaving { .. } => true,
            Phase::Shown { .. } => self.opacity < 1.0,
        }
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Applies every property in `update` except the position, which the
    /// board handles since it moves the element between containers.
    pub(crate) fn apply(&mut self, update: Update, now: Instant) {
        let Update {
            text,
            position: _,
            auto_close,
            show_progress,
            can_close,
            pause_on_hover,
            on_close,
        } = update;

        if let Some(text) = text {
            self.text = text;
        }
        if let Some(auto_close) = auto_close {
            self.set_auto_close(auto_close, now);
        }
        if let Some(pause_on_hover) = pause_on_hover {
            self.set_pause_on_hover(pause_on_hover, now);
        }
        if let Some(show_progress) = show_progress {
            self.set_show_progress(show_progress);
        }
        if let Some(can_close) = can_close {
            self.can_close = can_close;
        }
        if let Some(on_close) = on_close {
            self.on_close = Some(on_close);
        }
    }

    /// Cancels the pending auto-close and schedules a fresh one.
    fn set_auto_close(&mut self, auto_close: AutoClose, now: Instant) {
        self.auto_close = auto_close;
        self.countdown = auto_close.duration().map(|duration| {
            let mut countdown = Countdown::start(duration, now);
            if self.pause_on_hover && self.hovered {
                countdown.pause(now);
            }
            countdown
        });
        if self.show_progress {
            self.progress = 1.0;
        }
    }

    fn set_show_progress(&mut self, show_progress: bool) {
        self.show_progress = show_progress;
        self.progress = 1.0;
    }

    fn set_pause_on_hover(&mut self, pause_on_hover: bool, now: Instant) {
        self.pause_on_hover = pause_on_hover;
        if let Some(countdown) = self.countdown.as_mut() {
            if pause_on_hover && self.hovered {
                countdown.pause(now);
            } else {
                countdown.resume(now);
            }
        }
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if !self.pause_on_hover {
            return;
        }
        if let Some(countdown) = self.countdown.as_mut() {
            if hovered {
                countdown.pause(now);
            } else {
                countdown.resume(now);
            }
        }
    }

    /// Advances the reveal, fade and progress bar to `now`.
    pub(crate) fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Entering => {
                self.phase = Phase::Shown { since: now };
                self.opacity = 0.0;
            }
            Phase::Shown { since } => {
                self.opacity = transition_fraction(since, now);
            }
            Phase::Leaving { since } => {
                self.opacity = self.opacity.min(1.0 - transition_fraction(since, now));
                return;
            }
        }

        if self.show_progress {
            self.progress = self
                .countdown
                .map_or(1.0, |countdown| countdown.fraction_remaining(now));
        }
    }

    #[must_use]
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        !self.is_leaving()
            && self
                .countdown
                .is_some_and(|countdown| countdown.is_expired(now))
    }

    /// Starts the exit transition, cancels both timers and runs the
    /// completion callback. Returns `false` if the toast was already leaving.
    pub(crate) fn begin_leaving(&mut self, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = Phase::Leaving { since: now };
        self.countdown = None;
        if let Some(on_close) = self.on_close.as_mut() {
            on_close.call(self.id);
        }
        true
    }

    /// Whether the exit transition has ended and the element can be detached.
    #[must_use]
    pub(crate) fn is_transition_finished(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Leaving { since } => now.saturating_duration_since(since) >= TRANSITION,
            _ => false,
        }
    }
}

fn transition_fraction(since: Instant, now: Instant) -> f32 {
    (now.saturating_duration_since(since).as_secs_f32() / TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
}
