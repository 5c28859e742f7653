//! Process-wide knobs.
//!
//! The only knob today is the number of significant decimal digits used
//! by the `Display` impls. It is meant to be set once at startup; code
//! that needs a specific width should call `to_decimal` directly.

use std::sync::OnceLock;

/// Digits shown by `Display` when nothing was configured.
pub const DEFAULT_DISPLAY_DIGITS: u32 = 15;

static DISPLAY_DIGITS: OnceLock<u32> = OnceLock::new();

/// Set the digit count used by the `Display` impls.
///
/// Takes effect once per process; returns false when a value was already
/// installed, leaving the previous value in place. Values below 2 are
/// raised to 2.
pub fn set_display_digits(digits: u32) -> bool {
    DISPLAY_DIGITS.set(digits.max(2)).is_ok()
}

/// The configured digit count, or [`DEFAULT_DISPLAY_DIGITS`].
pub fn display_digits() -> u32 {
    DISPLAY_DIGITS.get().copied().unwrap_or(DEFAULT_DISPLAY_DIGITS)
}
