//! Day-name handling.
//!
//! Upstream data spells days inconsistently (`"MONDAY"`, `"monday"`,
//! `"Monday"`). Everything inside the crate compares canonical names:
//! first letter upper-case, the rest lower-case.

/// Days of the week in display order.
pub const WEEK_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Canonicalizes a day name: `"WEDNESDAY"` → `"Wednesday"`.
///
/// Surrounding whitespace is dropped. Unknown names are still
/// canonicalized, never rejected.
pub fn canonical_day(day: &str) -> String {
    let day = day.trim();
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Position of a canonical day name within [`WEEK_DAYS`].
pub fn week_index(day: &str) -> Option<usize> {
    WEEK_DAYS.iter().position(|d| *d == day)
}

/// Canonicalizes and deduplicates a day selection, keeping first-seen order.
pub fn canonical_day_set<S: AsRef<str>>(days: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(days.len());
    for day in days {
        let day = canonical_day(day.as_ref());
        if !day.is_empty() && !out.contains(&day) {
            out.push(day);
        }
    }
    out
}
