// SPDX-License-Identifier: MPL-2.0
//! Construction options and partial updates for toasts.
//!
//! [`Options`] carries a full property set with the widget defaults
//! (close after 5 seconds, top-right, progress bar shown, click to close).
//! [`Update`] carries only the properties that should change; constructing a
//! toast is applying the full option set as one update.

use super::position::Position;
use super::toast::ToastId;
use std::fmt;
use std::time::Duration;

/// Auto-close delay used when none is given.
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(5000);

/// When (if ever) a toast removes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoClose {
    After(Duration),
    Disabled,
}

impl AutoClose {
    /// Builds a setting from milliseconds, `0` meaning disabled.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            AutoClose::Disabled
        } else {
            AutoClose::After(Duration::from_millis(millis))
        }
    }

    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AutoClose::After(duration) => Some(duration),
            AutoClose::Disabled => None,
        }
    }
}

impl Default for AutoClose {
    fn default() -> Self {
        AutoClose::After(DEFAULT_AUTO_CLOSE)
    }
}

/// Completion callback, run once when a toast starts leaving.
pub struct OnClose(Box<dyn FnMut(ToastId) + Send>);

impl OnClose {
    pub fn new(callback: impl FnMut(ToastId) + Send + 'static) -> Self {
        Self(Box::new(callback))
    }

    pub(crate) fn call(&mut self, id: ToastId) {
        (self.0)(id);
    }
}

impl fmt::Debug for OnClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnClose(..)")
    }
}

/// Full property set used to construct a toast.
#[derive(Debug)]
pub struct Options {
    pub text: String,
    pub position: Position,
    pub auto_close: AutoClose,
    pub show_progress: bool,
    pub can_close: bool,
    /// Freeze the countdown while the cursor is over the toast.
    pub pause_on_hover: bool,
    pub on_close: Option<OnClose>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: Position::default(),
            auto_close: AutoClose::default(),
            show_progress: true,
            can_close: true,
            pause_on_hover: false,
            on_close: None,
        }
    }
}

impl Options {
    /// Default options with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: AutoClose) -> Self {
        self.auto_close = auto_close;
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub fn can_close(mut self, can_close: bool) -> Self {
        self.can_close = can_close;
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut(ToastId) + Send + 'static) -> Self {
        self.on_close = Some(OnClose::new(callback));
        self
    }
}

/// Partial set of property changes; `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct Update {
    pub text: Option<String>,
    pub position: Option<Position>,
    pub auto_close: Option<AutoClose>,
    pub show_progress: Option<bool>,
    pub can_close: Option<bool>,
    pub pause_on_hover: Option<bool>,
    pub on_close: Option<OnClose>,
}

impl Update {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: AutoClose) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = Some(show_progress);
        self
    }

    #[must_use]
    pub fn can_close(mut self, can_close: bool) -> Self {
        self.can_close = Some(can_close);
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut(ToastId) + Send + 'static) -> Self {
        self.on_close = Some(OnClose::new(callback));
        self
    }
}

impl From<Options> for Update {
    fn from(options: Options) -> Self {
        Self {
            text: Some(options.text),
            position: Some(options.position),
            auto_close: Some(options.auto_close),
            show_progress: Some(options.show_progress),
            can_close: Some(options.can_close),
            pause_on_hover: Some(options.pause_on_hover),
            on_close: options.on_close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget_contract() {
        let options = Options::default();
        assert_eq!(options.auto_close, AutoClose::After(Duration::from_secs(5)));
        assert_eq!(options.position, Position::TopRight);
        assert!(options.show_progress);
        assert!(options.can_close);
        assert!(!options.pause_on_hover);
        assert!(options.on_close.is_none());
    }

    #[test]
    fn zero_millis_disables_auto_close() {
        assert_eq!(AutoClose::from_millis(0), AutoClose::Disabled);
        assert_eq!(
            AutoClose::from_millis(1500).duration(),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn options_convert_to_a_full_update() {
        let update = Update::from(
            Options::new("hello")
                .position(Position::BottomLeft)
                .auto_close(AutoClose::Disabled)
                .on_close(|_| {}),
        );
        assert_eq!(update.text.as_deref(), Some("hello"));
        assert_eq!(update.position, Some(Position::BottomLeft));
        assert_eq!(update.auto_close, Some(AutoClose::Disabled));
        assert_eq!(update.show_progress, Some(true));
        assert_eq!(update.can_close, Some(true));
        assert!(update.on_close.is_some());
    }
}
