//! Class and lab time clashes.
//!
//! Two meetings clash when they fall on the same day and their time
//! windows overlap (touching endpoints are fine). Detects:
//! - Clashes inside a single section (a lab on top of its own class)
//! - Clashes between meetings of different sections in one routine

use serde::Serialize;
use tracing::debug;

use crate::models::{CanonicalEntry, EntryKind, Section};
use crate::normalize::section_entries;

/// One side of a clash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashSide {
    /// Course code.
    pub course_code: String,
    /// Section name.
    pub section_name: String,
    /// Class or lab.
    pub kind: EntryKind,
    /// Start time, as delivered upstream.
    pub start_time: String,
    /// End time, as delivered upstream.
    pub end_time: String,
}

/// Two meetings of different sections overlapping on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeClash {
    /// Canonical day both meetings fall on.
    pub day: String,
    /// Meeting of the earlier section in routine order.
    pub first: ClashSide,
    /// Meeting of the later section.
    pub second: ClashSide,
}

impl TimeClash {
    /// Human-readable description.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} ({} - {}) overlaps {} {} {} ({} - {}) on {}",
            self.first.course_code,
            self.first.section_name,
            self.first.kind.label(),
            self.first.start_time,
            self.first.end_time,
            self.second.course_code,
            self.second.section_name,
            self.second.kind.label(),
            self.second.start_time,
            self.second.end_time,
            self.day
        )
    }
}

impl From<&CanonicalEntry<'_>> for ClashSide {
    fn from(entry: &CanonicalEntry<'_>) -> Self {
        Self {
            course_code: entry.section.course_code.clone(),
            section_name: entry.section.section_name.clone(),
            kind: entry.kind,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
        }
    }
}

/// Whether any two meetings of one section overlap.
pub fn has_internal_conflict(section: &Section) -> bool {
    let entries = section_entries(section);
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.clashes_with(b) {
                debug!(
                    course = %section.course_code,
                    section = %section.section_name,
                    day = %a.day,
                    "internal schedule conflict"
                );
                return true;
            }
        }
    }
    false
}

/// All clashes between meetings of different sections.
///
/// Each overlapping pair is reported once, in section order.
pub fn find_time_clashes(sections: &[Section]) -> Vec<TimeClash> {
    let per_section: Vec<Vec<CanonicalEntry<'_>>> = sections.iter().map(section_entries).collect();
    let mut clashes = Vec::new();

    for (i, left) in per_section.iter().enumerate() {
        for right in &per_section[i + 1..] {
            for a in left {
                for b in right {
                    if a.clashes_with(b) {
                        clashes.push(TimeClash {
                            day: a.day.clone(),
                            first: ClashSide::from(a),
                            second: ClashSide::from(b),
                        });
                    }
                }
            }
        }
    }

    clashes
}
