//! Day-coverage validation for generated routines.
//!
//! A generated routine is only acceptable if every class and lab
//! meeting falls on one of the days the user selected. The check is
//! fail-closed: a single missing day rejects the whole routine, and the
//! caller gets a diagnostic instead of a partial grid.
//!
//! Checks:
//! 1. Every class meeting day is selected
//! 2. Every lab meeting day (either lab shape) is selected

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::grid::{Grid, GridBuilder};
use crate::models::{canonical_day_set, week_index, EntryKind, Section};
use crate::normalize::section_entries;

/// Result of a day-coverage check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCoverage {
    /// `true` iff both mismatch lists are empty.
    pub is_valid: bool,
    /// Class days outside the selection, as `"CSE110 (Friday)"`.
    pub mismatched_class_days: Vec<String>,
    /// Lab days outside the selection, as `"CSE110 Lab (Friday)"`.
    pub mismatched_lab_days: Vec<String>,
}

impl DayCoverage {
    /// User-facing diagnostic listing every mismatch.
    ///
    /// Empty when the routine is valid.
    pub fn message(&self) -> String {
        if self.is_valid {
            return String::new();
        }

        let mut message = String::from("Cannot generate routine with the selected days:\n\n");
        if !self.mismatched_class_days.is_empty() {
            message.push_str(&format!(
                "- Missing required class day(s) for: {}\n",
                self.mismatched_class_days.join(", ")
            ));
        }
        if !self.mismatched_lab_days.is_empty() {
            message.push_str(&format!(
                "- Missing required lab day(s) for: {}\n",
                self.mismatched_lab_days.join(", ")
            ));
        }
        message.push_str("\nPlease select the necessary day(s) for all courses.");
        message
    }

    /// Total number of mismatched meetings.
    pub fn mismatch_count(&self) -> usize {
        self.mismatched_class_days.len() + self.mismatched_lab_days.len()
    }
}

/// Checks that every meeting day of `sections` is in `selected_days`.
///
/// Day names compare case-insensitively. Every mismatch is recorded,
/// one per meeting, tagged with the owning course code.
pub fn validate_day_coverage<S: AsRef<str>>(
    sections: &[Section],
    selected_days: &[S],
) -> DayCoverage {
    let selected = canonical_day_set(selected_days);
    let mut coverage = DayCoverage::default();

    for section in sections {
        for entry in section_entries(section) {
            if selected.contains(&entry.day) {
                continue;
            }
            match entry.kind {
                EntryKind::Class => coverage
                    .mismatched_class_days
                    .push(format!("{} ({})", section.course_code, entry.day)),
                EntryKind::Lab => coverage
                    .mismatched_lab_days
                    .push(format!("{} Lab ({})", section.course_code, entry.day)),
            }
        }
    }

    coverage.is_valid =
        coverage.mismatched_class_days.is_empty() && coverage.mismatched_lab_days.is_empty();
    coverage
}

/// Validates a generated routine and builds its grid.
///
/// Fail-closed: on any day mismatch the grid is never built and
/// [`Error::DayMismatch`] carries the full diagnostic.
pub fn accept_routine<'a, S: AsRef<str>>(
    sections: &'a [Section],
    selected_days: &[S],
) -> Result<Grid<'a>> {
    accept_routine_with(&GridBuilder::new(), sections, selected_days)
}

/// [`accept_routine`] with a custom grid configuration.
pub fn accept_routine_with<'a, S: AsRef<str>>(
    builder: &GridBuilder,
    sections: &'a [Section],
    selected_days: &[S],
) -> Result<Grid<'a>> {
    let coverage = validate_day_coverage(sections, selected_days);
    if !coverage.is_valid {
        warn!(
            mismatches = coverage.mismatch_count(),
            "generated routine rejected: meets on unselected days"
        );
        return Err(Error::DayMismatch(coverage));
    }
    Ok(builder.build(sections, selected_days))
}

/// Distinct days a routine requires on campus, Sunday first.
///
/// Unrecognized day names sort after the week, alphabetically.
pub fn required_days(sections: &[Section]) -> Vec<String> {
    let mut days: Vec<String> = Vec::new();
    for entry in sections.iter().flat_map(section_entries) {
        if !entry.day.is_empty() && !days.contains(&entry.day) {
            days.push(entry.day);
        }
    }
    days.sort_by(|a, b| {
        let key = |d: &String| week_index(d).unwrap_or(usize::MAX);
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    });
    days
}
