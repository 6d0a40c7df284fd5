//! Section (offered class) model.
//!
//! Mirrors the section records produced by the course-data service.
//! Field names follow the wire format (`camelCase`); unknown fields
//! are ignored so that richer upstream payloads still decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One offered section of a course.
///
/// Immutable once fetched. The engine borrows sections for the duration
/// of one computation and never clones their schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    /// Course code (e.g., `"CSE110"`).
    pub course_code: String,
    /// Section name (e.g., `"01"`).
    pub section_name: String,
    /// Upstream section identifier.
    pub section_id: Option<u64>,
    /// Faculty initials, or `None` when not yet assigned.
    pub faculties: Option<String>,
    /// Total seats.
    pub capacity: i64,
    /// Seats already taken.
    pub consumed_seat: i64,
    /// Class room, possibly composite (`"MON: R101; TUE: R202"`).
    pub room_name: Option<String>,
    /// Class meetings and exam dates.
    #[serde(deserialize_with = "null_as_default")]
    pub section_schedule: SectionSchedule,
    /// Lab meetings, in one of the historical shapes.
    pub lab_schedules: Option<LabSchedules>,
    /// Lab room fallback when lab entries carry none.
    pub lab_room_name: Option<String>,
    /// Lab faculty fallback.
    pub lab_faculties: Option<String>,
}

/// Class meetings and exam fields of a section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionSchedule {
    /// Weekly class meetings.
    #[serde(deserialize_with = "null_as_default")]
    pub class_schedules: Vec<MeetingTime>,
    /// Midterm date (`"2026-03-10"` or `"10-03-2026"`).
    pub mid_exam_date: Option<String>,
    /// Midterm start time.
    pub mid_exam_start_time: Option<String>,
    /// Midterm end time.
    pub mid_exam_end_time: Option<String>,
    /// Final exam date.
    pub final_exam_date: Option<String>,
    /// Final exam start time.
    pub final_exam_start_time: Option<String>,
    /// Final exam end time.
    pub final_exam_end_time: Option<String>,
}

/// A raw weekly meeting: `{day, startTime, endTime, room?}`.
///
/// Times are kept as text; see [`crate::time::parse_minutes`].
/// Missing or `null` fields decode as empty strings, so one partial
/// entry never changes how the surrounding list is classified.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTime {
    /// Day name in any casing (`"MONDAY"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    /// Start time, 12- or 24-hour.
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    /// End time, 12- or 24-hour.
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    /// Room for this meeting, overriding the section's room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Lab schedule data as delivered upstream.
///
/// Two shapes exist for the same concept. Detection is structural:
/// an array is a flat list, an object with a `classSchedules` array is
/// the wrapped form, anything else is kept verbatim and ignored by
/// [`crate::normalize::lab_entries`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LabSchedules {
    /// `[{day, startTime, endTime, room?}, ...]`
    FlatList(Vec<MeetingTime>),
    /// `{ "classSchedules": [...] }`
    Wrapped {
        #[serde(rename = "classSchedules")]
        class_schedules: Vec<MeetingTime>,
    },
    /// Any other shape.
    Unrecognized(Value),
}

impl MeetingTime {
    /// Creates a meeting without a room.
    pub fn new(
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            room: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

impl Section {
    /// Creates a section with no meetings.
    pub fn new(course_code: impl Into<String>, section_name: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            section_name: section_name.into(),
            ..Self::default()
        }
    }

    /// Sets the upstream identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.section_id = Some(id);
        self
    }

    /// Sets the faculty.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculties = Some(faculty.into());
        self
    }

    /// Sets capacity and consumed seats.
    pub fn with_seats(mut self, capacity: i64, consumed: i64) -> Self {
        self.capacity = capacity;
        self.consumed_seat = consumed;
        self
    }

    /// Sets the class room field.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room_name = Some(room.into());
        self
    }

    /// Adds a class meeting.
    pub fn with_class(mut self, meeting: MeetingTime) -> Self {
        self.section_schedule.class_schedules.push(meeting);
        self
    }

    /// Sets the lab schedules.
    pub fn with_labs(mut self, labs: LabSchedules) -> Self {
        self.lab_schedules = Some(labs);
        self
    }

    /// Sets the lab room fallback.
    pub fn with_lab_room(mut self, room: impl Into<String>) -> Self {
        self.lab_room_name = Some(room.into());
        self
    }

    /// Sets the lab faculty fallback.
    pub fn with_lab_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.lab_faculties = Some(faculty.into());
        self
    }

    /// Sets the midterm date and time window.
    pub fn with_midterm(
        mut self,
        date: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.section_schedule.mid_exam_date = Some(date.into());
        self.section_schedule.mid_exam_start_time = Some(start.into());
        self.section_schedule.mid_exam_end_time = Some(end.into());
        self
    }

    /// Sets the final exam date and time window.
    pub fn with_final(
        mut self,
        date: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.section_schedule.final_exam_date = Some(date.into());
        self.section_schedule.final_exam_start_time = Some(start.into());
        self.section_schedule.final_exam_end_time = Some(end.into());
        self
    }

    /// Seats left (`capacity - consumedSeat`). Negative when oversubscribed.
    #[inline]
    pub fn available_seats(&self) -> i64 {
        self.capacity - self.consumed_seat
    }

    /// Faculty label for display, `"TBA"` when unassigned.
    pub fn faculty_label(&self) -> &str {
        self.faculties.as_deref().unwrap_or("TBA")
    }

    /// Whether two records describe the same offered section.
    ///
    /// Compares upstream IDs when both are present, otherwise
    /// course code and section name.
    pub fn is_same_section(&self, other: &Section) -> bool {
        match (self.section_id, other.section_id) {
            (Some(a), Some(b)) => a == b,
            _ => self.course_code == other.course_code && self.section_name == other.section_name,
        }
    }
}

/// Decodes `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_section() {
        let value = json!({
            "courseCode": "CSE220",
            "sectionName": "03",
            "sectionId": 177,
            "faculties": "ABC",
            "capacity": 40,
            "consumedSeat": 35,
            "roomName": "UB40201",
            "courseName": "Data Structures",
            "sectionSchedule": {
                "classSchedules": [
                    {"day": "SUNDAY", "startTime": "08:00:00", "endTime": "09:20:00"}
                ],
                "midExamDate": "2026-03-10",
                "midExamStartTime": "10:00:00",
                "midExamEndTime": "12:00:00"
            },
            "labSchedules": [
                {"day": "TUESDAY", "startTime": "14:00:00", "endTime": "16:50:00", "room": "09F-24L"}
            ]
        });

        let section: Section = serde_json::from_value(value).unwrap();
        assert_eq!(section.course_code, "CSE220");
        assert_eq!(section.section_id, Some(177));
        assert_eq!(section.available_seats(), 5);
        assert_eq!(section.section_schedule.class_schedules.len(), 1);
        assert_eq!(
            section.section_schedule.mid_exam_date.as_deref(),
            Some("2026-03-10")
        );
        assert!(matches!(
            section.lab_schedules,
            Some(LabSchedules::FlatList(ref labs)) if labs.len() == 1
        ));
    }

    #[test]
    fn test_decode_wrapped_lab_shape() {
        let value = json!({
            "courseCode": "PHY111",
            "labSchedules": {
                "classSchedules": [
                    {"day": "THURSDAY", "startTime": "11:00:00", "endTime": "13:50:00"}
                ],
                "labSectionId": 9
            }
        });

        let section: Section = serde_json::from_value(value).unwrap();
        match section.lab_schedules {
            Some(LabSchedules::Wrapped { class_schedules }) => {
                assert_eq!(class_schedules.len(), 1);
                assert_eq!(class_schedules[0].day, "THURSDAY");
            }
            other => panic!("expected wrapped shape, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_lab_entry_keeps_flat_shape() {
        let section: Section = serde_json::from_value(json!({
            "courseCode": "CSE110",
            "labSchedules": [
                {"day": "FRIDAY", "startTime": "08:00:00", "endTime": "10:50:00"},
                {"day": "SATURDAY", "startTime": null, "endTime": null}
            ]
        }))
        .unwrap();
        match section.lab_schedules {
            Some(LabSchedules::FlatList(labs)) => {
                assert_eq!(labs.len(), 2);
                assert_eq!(labs[1].day, "SATURDAY");
                assert!(labs[1].start_time.is_empty());
            }
            other => panic!("expected flat list, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_class_entry_decodes() {
        let section: Section = serde_json::from_value(json!({
            "courseCode": "MAT110",
            "sectionSchedule": {
                "classSchedules": [{"day": "MONDAY", "startTime": "08:00:00"}]
            }
        }))
        .unwrap();
        let meeting = &section.section_schedule.class_schedules[0];
        assert_eq!(meeting.day, "MONDAY");
        assert_eq!(meeting.end_time, "");
    }

    #[test]
    fn test_decode_unrecognized_and_null_labs() {
        let odd: Section =
            serde_json::from_value(json!({"courseCode": "X", "labSchedules": "Friday 2pm"}))
                .unwrap();
        assert!(matches!(odd.lab_schedules, Some(LabSchedules::Unrecognized(_))));

        let none: Section =
            serde_json::from_value(json!({"courseCode": "X", "labSchedules": null})).unwrap();
        assert!(none.lab_schedules.is_none());
    }

    #[test]
    fn test_decode_null_schedule() {
        let section: Section = serde_json::from_value(json!({
            "courseCode": "HUM103",
            "sectionSchedule": null
        }))
        .unwrap();
        assert!(section.section_schedule.class_schedules.is_empty());
        assert_eq!(section.available_seats(), 0);
    }

    #[test]
    fn test_available_seats() {
        assert_eq!(Section::new("A", "1").with_seats(40, 35).available_seats(), 5);
        assert_eq!(Section::new("A", "1").with_seats(30, 32).available_seats(), -2);
    }

    #[test]
    fn test_faculty_label() {
        assert_eq!(Section::new("A", "1").faculty_label(), "TBA");
        assert_eq!(Section::new("A", "1").with_faculty("XYZ").faculty_label(), "XYZ");
    }

    #[test]
    fn test_is_same_section() {
        let a = Section::new("CSE110", "01").with_id(1);
        let b = Section::new("CSE110", "02").with_id(1);
        let c = Section::new("CSE110", "01");
        assert!(a.is_same_section(&b)); // IDs win
        assert!(a.is_same_section(&c)); // falls back to code + name
        assert!(!b.is_same_section(&c));
    }
}
