// SPDX-License-Identifier: MPL-2.0
//! Shared visual infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
