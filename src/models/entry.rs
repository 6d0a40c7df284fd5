//! Canonical schedule entries.
//!
//! Class meetings and lab meetings arrive in different shapes; after
//! normalization both are a [`CanonicalEntry`] and no downstream code
//! looks at the original shape again.

use serde::Serialize;

use super::Section;
use crate::time::parse_minutes;

/// Whether an entry is a class or a lab meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    Class,
    Lab,
}

impl EntryKind {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Class => "Class",
            EntryKind::Lab => "Lab",
        }
    }
}

/// A normalized weekly meeting of a section.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalEntry<'a> {
    /// Canonical day name (`"Monday"`).
    pub day: String,
    /// Start time, as delivered upstream.
    pub start_time: String,
    /// End time, as delivered upstream.
    pub end_time: String,
    /// Room field after fallbacks; may still be composite.
    pub room: String,
    /// Faculty label (labs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    /// Class or lab.
    pub kind: EntryKind,
    /// Section this meeting belongs to.
    pub section: &'a Section,
}

impl CanonicalEntry<'_> {
    /// Start in minutes since midnight.
    #[inline]
    pub fn start_min(&self) -> u32 {
        parse_minutes(&self.start_time)
    }

    /// End in minutes since midnight.
    #[inline]
    pub fn end_min(&self) -> u32 {
        parse_minutes(&self.end_time)
    }

    /// Whether two entries meet on the same day at overlapping times.
    pub fn clashes_with(&self, other: &CanonicalEntry<'_>) -> bool {
        self.day == other.day
            && crate::time::overlaps(
                self.start_min(),
                self.end_min(),
                other.start_min(),
                other.end_min(),
            )
    }
}
