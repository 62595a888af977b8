// SPDX-License-Identifier: MPL-2.0
//! Screen anchors a toast container can be attached to.

use crate::error::{Error, Result};
use iced::alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corner (or edge center) of the window where a container of toasts lives.
///
/// Toasts sharing a position are stacked in the same container.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Kebab-case name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        if self.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == wanted)
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}
