//! Routine domain models.
//!
//! Wire types decoded from the course-data service and the routine
//! generator, plus the normalized types the engine works with.
//!
//! # Model Overview
//!
//! | Type | Role |
//! |------|------|
//! | Section | One offered class section (wire) |
//! | MeetingTime | Raw weekly meeting `{day, startTime, endTime, room?}` |
//! | LabSchedules | Lab meetings in either historical shape |
//! | RoutinePayload | Generator output in any accepted shape |
//! | CanonicalEntry | Normalized class/lab meeting |
//! | TimeSlot | Fixed display window of the grid |

mod day;
mod entry;
mod routine;
mod section;
mod slot;

pub use day::{canonical_day, canonical_day_set, week_index, WEEK_DAYS};
pub use entry::{CanonicalEntry, EntryKind};
pub use routine::{sections_from_json, sections_from_value, RoutinePayload};
pub use section::{LabSchedules, MeetingTime, Section, SectionSchedule};
pub use slot::{TimeSlot, STANDARD_SLOTS};
