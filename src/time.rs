//! Time-string parsing and interval overlap.
//!
//! Upstream times come in two spellings: 12-hour (`"2:30 PM"`) and
//! 24-hour (`"14:30"` or `"14:30:00"`). Both reduce to minutes since
//! midnight so that overlap tests are exact integer comparisons.
//!
//! # Degradation
//! Parsing never fails. Anything unparseable is treated as `0`
//! (midnight), which callers cannot tell apart from a real midnight.

use tracing::trace;

/// Parses a time string into minutes since midnight.
///
/// - No `:` → `0`.
/// - Contains `AM`/`PM` → 12-hour clock: `PM` with hour ≠ 12 adds 12 hours,
///   `12 AM` is hour 0.
/// - Otherwise `H:MM` (an optional `:SS` is ignored) on a 24-hour clock.
/// - Any other malformed input → `0`.
///
/// # Examples
///
/// ```
/// use routine_grid::time::parse_minutes;
///
/// assert_eq!(parse_minutes("2:30 PM"), 870);
/// assert_eq!(parse_minutes("14:30"), 870);
/// assert_eq!(parse_minutes("12:00 AM"), 0);
/// assert_eq!(parse_minutes("garbage"), 0);
/// ```
pub fn parse_minutes(time: &str) -> u32 {
    let minutes = split_clock(time)
        .and_then(|(hour, minute)| hour.checked_mul(60)?.checked_add(minute));
    match minutes {
        Some(minutes) => minutes,
        None => {
            trace!(time, "unparseable time string, treating as midnight");
            0
        }
    }
}

/// Whether two half-open intervals `[a_start, a_end)` and `[b_start, b_end)` intersect.
///
/// Touching endpoints do not overlap.
#[inline]
pub fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Renders a time string on the 12-hour clock: `"14:30:00"` → `"2:30 PM"`.
///
/// Strings without `:` or that fail to parse are returned unchanged.
pub fn format_12_hour(time: &str) -> String {
    match split_clock(time) {
        Some((hour, minute)) => {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display_hour}:{minute:02} {period}")
        }
        None => time.to_string(),
    }
}

/// Display label for a meeting window: `"9:30 AM - 10:50 AM"`.
pub fn time_label(start: &str, end: &str) -> String {
    format!("{} - {}", format_12_hour(start), format_12_hour(end))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Splits a time string into 24-hour `(hour, minute)`.
fn split_clock(time: &str) -> Option<(u32, u32)> {
    let time = time.trim();
    if !time.contains(':') {
        return None;
    }

    let (clock, period) = if let Some(pos) = time.find("PM") {
        (&time[..pos], Some(Period::Pm))
    } else if let Some(pos) = time.find("AM") {
        (&time[..pos], Some(Period::Am))
    } else {
        (time, None)
    };

    let mut parts = clock.trim().split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;

    let hour = match period {
        Some(Period::Pm) if hour != 12 => hour.saturating_add(12),
        Some(Period::Am) if hour == 12 => 0,
        _ => hour,
    };

    Some((hour, minute))
}
