//! Exam conflicts: detection and report parsing.
//!
//! The routine generator reports exam clashes as a plain-text block.
//! [`exam`] produces that block from section data; [`report`] turns any
//! such block back into a [`ConflictReport`] for display. The parser only
//! depends on the literal header strings and conflict markers.

pub mod exam;
pub mod report;

pub use exam::{
    find_exam_conflicts, format_report, normalize_date, ExamConflict, ExamConflictDetector,
    ExamKind,
};
pub use report::{is_conflict_report, parse_report, ConflictReport};
