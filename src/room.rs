//! Per-day room resolution.
//!
//! Room fields are sometimes composite, listing one room per meeting day:
//! `"MON: R101; TUE: R202"` or `"Sunday 08:00: UB40201; Tuesday 08:00: UB40202"`.

use tracing::trace;

use crate::models::{canonical_day, week_index};
use crate::normalize::TBA;

/// Picks the room for `day` out of a room field.
///
/// A field with neither `;` nor `:` is a single room and is returned as
/// is. Otherwise it is read as day-tagged parts separated by `;`, scanned
/// in order; the first part mentioning the day (case-insensitive, matched
/// on its three-letter prefix so `"TUE"` and `"Tuesday"` both match
/// `"Tuesday"`) yields the text after its last `:`. No matching part, or a
/// `day` that is not a full weekday name → `"TBA"`.
///
/// When several parts mention the day, the first one wins.
///
/// # Examples
///
/// ```
/// use routine_grid::room::resolve_for_day;
///
/// assert_eq!(resolve_for_day("MON: R101; TUE: R202", "Tuesday"), "R202");
/// assert_eq!(resolve_for_day("R305", "Friday"), "R305");
/// assert_eq!(resolve_for_day("MON: R101", "Friday"), "TBA");
/// ```
pub fn resolve_for_day(room_field: &str, day: &str) -> String {
    if !room_field.contains(';') && !room_field.contains(':') {
        return room_field.to_string();
    }

    let Some(needle) = day_needle(day) else {
        trace!(room_field, day, "not a weekday name");
        return TBA.to_string();
    };

    room_field
        .split(';')
        .map(str::trim)
        .find(|part| part.to_uppercase().contains(&needle))
        .map(|part| {
            part.rsplit(':')
                .next()
                .unwrap_or(part)
                .trim()
                .to_string()
        })
        .unwrap_or_else(|| {
            trace!(room_field, day, "no room listed for day");
            TBA.to_string()
        })
}

/// Upper-cased three-letter prefix of a weekday name, `None` for anything
/// that is not one of [`WEEK_DAYS`](crate::models::WEEK_DAYS).
fn day_needle(day: &str) -> Option<String> {
    let day = canonical_day(day);
    week_index(&day)?;
    Some(day[..3].to_uppercase())
}
