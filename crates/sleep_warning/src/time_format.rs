//! Conversions between the host's packed clock encoding and the half-hour
//! slot index used by the settings sliders, plus human-readable formatting.
//!
//! Packed clock encoding: `hour * 100 + minute`, hours 6..=26 (hour 26 is
//! 2:00 AM the following day), minutes on a 30-minute grid. Slot encoding:
//! half hours since 6:00 AM, 0..=40, so the settings menu can expose a
//! threshold as a plain integer slider.

// =============================================================================
// Constants
// =============================================================================

/// Sentinel meaning "this threshold is disabled".
pub const DISABLED: i32 = -1;

/// Earliest configurable hour (6:00 AM).
pub const MIN_HOUR: i32 = 6;
/// Latest configurable hour (2:00 AM the following day).
pub const MAX_HOUR: i32 = 26;
/// Highest slot index, covering `MIN_HOUR..=MAX_HOUR` in half-hour steps.
pub const MAX_SLOT: i32 = (MAX_HOUR - MIN_HOUR) * 2;

/// Label rendered for a disabled threshold.
pub const DISABLED_LABEL: &str = "Off";

// =============================================================================
// Conversions
// =============================================================================

/// Convert a packed clock value to its half-hour slot index.
///
/// The disabled sentinel passes through unchanged. Out-of-range hours are
/// clamped into `[MIN_HOUR, MAX_HOUR]` rather than rejected; minutes round
/// down onto the half-hour grid (tens digit below 3 means :00, anything
/// else :30).
pub fn time_to_slot(time: i32) -> i32 {
    if time == DISABLED {
        return DISABLED;
    }
    let hour = (time / 100).clamp(MIN_HOUR, MAX_HOUR);
    let half = i32::from((time % 100) / 10 >= 3);
    (hour - MIN_HOUR) * 2 + half
}

/// Convert a half-hour slot index back to the packed clock encoding.
///
/// The disabled sentinel passes through unchanged.
pub fn slot_to_time(slot: i32) -> i32 {
    if slot == DISABLED {
        return DISABLED;
    }
    let hour = MIN_HOUR + slot / 2;
    let minute = (slot % 2) * 30;
    hour * 100 + minute
}

// =============================================================================
// Formatting
// =============================================================================

/// Render a packed clock value as `"H:MM AM"` / `"H:MM PM"`, or the
/// disabled label for the sentinel.
///
/// Hour-of-12 zero renders as 12, so noon is `12:00 PM` and hour 24 is
/// `12:00 AM`. Hours strictly between 11 and 24 render PM; hour 24 and
/// beyond have wrapped into the next morning and render AM.
pub fn format_time(time: i32) -> String {
    if time == DISABLED {
        return DISABLED_LABEL.to_string();
    }
    let hour = time / 100;
    let minute = time % 100;
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let period = if hour > 11 && hour < 24 { "PM" } else { "AM" };
    format!("{hour12}:{minute:02} {period}")
}

// =============================================================================
// Tests
// =============================================================================
