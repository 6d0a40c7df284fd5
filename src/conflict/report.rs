//! Exam-conflict report parsing.
//!
//! Routine generation reports exam clashes as plain text. The grammar is
//! the contract between producer and parser; there is no version
//! negotiation, so header strings and markers must match exactly:
//!
//! ```text
//! Exam Conflicts
//!
//! Affected Courses: CSE110, CSE111
//!
//! Midterm Conflicts
//! CSE110 ↔ CSE111: 2026-03-10, 10:00 AM - 12:00 PM
//!
//! Final Conflicts
//! CSE110 -> CSE111
//! ```
//!
//! Every section after the first header is optional. Missing sections
//! parse as empty, never as errors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// First line of every report.
pub const EXAM_CONFLICTS_HEADER: &str = "Exam Conflicts";
/// Prefix of the affected-courses line.
pub const AFFECTED_COURSES_HEADER: &str = "Affected Courses:";
/// Header of the midterm block.
pub const MIDTERM_HEADER: &str = "Midterm Conflicts";
/// Header of the final-exam block.
pub const FINAL_HEADER: &str = "Final Conflicts";
/// Tokens marking a conflict line: bidirectional arrow or ASCII arrow.
pub const CONFLICT_MARKERS: [&str; 2] = ["↔", "->"];

/// Structured form of a conflict report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Course codes named on the affected-courses line.
    pub affected_courses: BTreeSet<String>,
    /// Conflict lines of the midterm block, trimmed.
    pub midterm_conflicts: Vec<String>,
    /// Conflict lines of the final-exam block, trimmed.
    pub final_conflicts: Vec<String>,
}

impl ConflictReport {
    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.affected_courses.is_empty()
            && self.midterm_conflicts.is_empty()
            && self.final_conflicts.is_empty()
    }

    /// Total number of conflict lines.
    pub fn conflict_count(&self) -> usize {
        self.midterm_conflicts.len() + self.final_conflicts.len()
    }
}

/// Whether an error text is an exam-conflict report at all.
pub fn is_conflict_report(text: &str) -> bool {
    text.contains(EXAM_CONFLICTS_HEADER)
}

/// Parses a conflict report.
///
/// # Examples
///
/// ```
/// use routine_grid::conflict::parse_report;
///
/// let report = parse_report(
///     "Exam Conflicts\n\nAffected Courses: CSE110, CSE111\n\nMidterm Conflicts\nCSE110 ↔ CSE111\n",
/// );
/// assert_eq!(report.affected_courses.len(), 2);
/// assert_eq!(report.midterm_conflicts, vec!["CSE110 ↔ CSE111".to_string()]);
/// assert!(report.final_conflicts.is_empty());
/// ```
pub fn parse_report(text: &str) -> ConflictReport {
    let lines: Vec<&str> = text.lines().collect();

    ConflictReport {
        affected_courses: affected_courses(&lines),
        midterm_conflicts: conflict_block(&lines, MIDTERM_HEADER, Some(FINAL_HEADER)),
        final_conflicts: conflict_block(&lines, FINAL_HEADER, None),
    }
}

/// Reads the affected-courses line that follows the report header.
///
/// Only blank lines may sit between the two. When the header line has
/// no value, the next non-blank line is the value.
fn affected_courses(lines: &[&str]) -> BTreeSet<String> {
    let Some(header) = lines.iter().position(|l| l.trim() == EXAM_CONFLICTS_HEADER) else {
        trace!("no exam conflicts header");
        return BTreeSet::new();
    };

    let mut rest = lines[header + 1..].iter().map(|l| l.trim()).filter(|l| !l.is_empty());
    let value = match rest.next().and_then(|l| l.strip_prefix(AFFECTED_COURSES_HEADER)) {
        Some(value) if !value.trim().is_empty() => value,
        Some(_) => match rest.next() {
            Some(next) if !is_header(next) => next,
            _ => return BTreeSet::new(),
        },
        None => return BTreeSet::new(),
    };

    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Conflict lines between `header` and `stop` (or end of text).
fn conflict_block(lines: &[&str], header: &str, stop: Option<&str>) -> Vec<String> {
    let Some(start) = lines.iter().position(|l| l.trim() == header) else {
        return Vec::new();
    };

    lines[start + 1..]
        .iter()
        .take_while(|l| stop.map_or(true, |s| !l.trim_start().starts_with(s)))
        .map(|l| l.trim())
        .filter(|l| CONFLICT_MARKERS.iter().any(|m| l.contains(m)))
        .map(str::to_string)
        .collect()
}

fn is_header(line: &str) -> bool {
    [EXAM_CONFLICTS_HEADER, MIDTERM_HEADER, FINAL_HEADER].contains(&line)
}
