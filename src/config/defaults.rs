// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration constants.

// ==========================================================================
// Auto-close Defaults
// ==========================================================================

/// Default auto-close delay in milliseconds (`0` disables auto-close).
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 5000;

/// Shortest enabled auto-close delay, short enough to still read a word.
pub const MIN_AUTO_CLOSE_MS: u64 = 500;

/// Longest auto-close delay.
pub const MAX_AUTO_CLOSE_MS: u64 = 600_000;

// ==========================================================================
// Affordance Defaults
// ==========================================================================

pub const DEFAULT_SHOW_PROGRESS: bool = true;

pub const DEFAULT_CAN_CLOSE: bool = true;

pub const DEFAULT_PAUSE_ON_HOVER: bool = false;

/// Clamps an enabled auto-close delay into the supported range; `0` stays
/// `0` (disabled).
#[must_use]
pub fn clamp_auto_close_ms(value: u64) -> u64 {
    if value == 0 {
        0
    } else {
        value.clamp(MIN_AUTO_CLOSE_MS, MAX_AUTO_CLOSE_MS)
    }
}

const _: () = {
    assert!(MIN_AUTO_CLOSE_MS > 0);
    assert!(MIN_AUTO_CLOSE_MS <= DEFAULT_AUTO_CLOSE_MS);
    assert!(DEFAULT_AUTO_CLOSE_MS <= MAX_AUTO_CLOSE_MS);
};
