//! Schedule normalization.
//!
//! Reduces a section's class meetings and lab meetings to one list of
//! [`CanonicalEntry`] values. Lab data is the interesting part: it comes
//! either as a flat list or wrapped in an object, and both shapes must
//! normalize to the same entries.
//!
//! # Room Fallbacks
//!
//! | Kind | Chain |
//! |------|-------|
//! | Class | entry `room` → section `roomName` → `"TBA"` |
//! | Lab | entry `room` → section `labRoomName` → `"TBA"` |

use tracing::debug;

use crate::models::{canonical_day, CanonicalEntry, EntryKind, LabSchedules, MeetingTime, Section};

/// Placeholder for missing room or faculty information.
pub const TBA: &str = "TBA";

/// Canonical lab entries of a section.
///
/// 1. No lab data → empty.
/// 2. Flat list → one entry per element.
/// 3. Wrapped `classSchedules` list → one entry per nested element.
/// 4. Any other shape → empty.
///
/// Lab entries always carry a faculty label (`labFaculties` or `"TBA"`).
pub fn lab_entries(section: &Section) -> Vec<CanonicalEntry<'_>> {
    let meetings: &[MeetingTime] = match &section.lab_schedules {
        None => return Vec::new(),
        Some(LabSchedules::FlatList(list)) => list,
        Some(LabSchedules::Wrapped { class_schedules }) => class_schedules,
        Some(LabSchedules::Unrecognized(value)) => {
            debug!(
                course = %section.course_code,
                section = %section.section_name,
                %value,
                "unrecognized lab schedule shape, ignoring"
            );
            return Vec::new();
        }
    };

    let faculty = section.lab_faculties.as_deref().unwrap_or(TBA);
    meetings
        .iter()
        .map(|m| CanonicalEntry {
            day: canonical_day(&m.day),
            start_time: m.start_time.clone(),
            end_time: m.end_time.clone(),
            room: first_room(&[m.room.as_deref(), section.lab_room_name.as_deref()]),
            faculty: Some(faculty.to_string()),
            kind: EntryKind::Lab,
            section,
        })
        .collect()
}

/// Canonical class entries of a section.
pub fn class_entries(section: &Section) -> Vec<CanonicalEntry<'_>> {
    section
        .section_schedule
        .class_schedules
        .iter()
        .map(|m| CanonicalEntry {
            day: canonical_day(&m.day),
            start_time: m.start_time.clone(),
            end_time: m.end_time.clone(),
            room: first_room(&[m.room.as_deref(), section.room_name.as_deref()]),
            faculty: None,
            kind: EntryKind::Class,
            section,
        })
        .collect()
}

/// All canonical entries of a section: class meetings, then labs.
pub fn section_entries(section: &Section) -> Vec<CanonicalEntry<'_>> {
    let mut entries = class_entries(section);
    entries.extend(lab_entries(section));
    entries
}

/// All canonical entries of a routine, in section order.
pub fn routine_entries(sections: &[Section]) -> Vec<CanonicalEntry<'_>> {
    sections.iter().flat_map(section_entries).collect()
}

/// First non-blank room in the chain, or `"TBA"`.
fn first_room(chain: &[Option<&str>]) -> String {
    chain
        .iter()
        .flatten()
        .map(|r| r.trim())
        .find(|r| !r.is_empty())
        .unwrap_or(TBA)
        .to_string()
}
