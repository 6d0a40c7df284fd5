//! Exam-conflict detection.
//!
//! Two sections of different courses conflict when their midterms (or
//! their finals) fall on the same calendar day at overlapping times.
//! Detected conflicts render to the report grammar understood by
//! [`parse_report`](super::parse_report).

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::report::{AFFECTED_COURSES_HEADER, EXAM_CONFLICTS_HEADER, FINAL_HEADER, MIDTERM_HEADER};
use crate::models::Section;
use crate::time::{format_12_hour, overlaps, parse_minutes};

/// Date spellings accepted for exam dates.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d", "%d/%m/%Y"];

/// Assumed exam length when the end time is missing (minutes).
pub const DEFAULT_EXAM_DURATION_MIN: u32 = 120;

/// Midterm or final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExamKind {
    Midterm,
    Final,
}

/// Two courses whose exams of one kind overlap.
///
/// Course codes are stored in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamConflict {
    /// Midterm or final.
    pub kind: ExamKind,
    /// Lexicographically smaller course code.
    pub first_course: String,
    /// Lexicographically larger course code.
    pub second_course: String,
    /// Exam date as delivered upstream.
    pub date: String,
    /// Exam time of the first section (`"10:00 AM - 12:00 PM"`).
    pub time: String,
}

impl ExamConflict {
    /// Report line: `"CSE110 ↔ CSE111: 2026-03-10, 10:00 AM - 12:00 PM"`.
    pub fn report_line(&self) -> String {
        format!(
            "{} ↔ {}: {}, {}",
            self.first_course, self.second_course, self.date, self.time
        )
    }
}

/// An exam occurrence of one section.
#[derive(Debug, Clone)]
struct ExamWindow<'a> {
    date: NaiveDate,
    raw_date: &'a str,
    start_min: u32,
    end_min: u32,
    label: String,
}

/// Finds exam conflicts with a configurable default exam length.
#[derive(Debug, Clone)]
pub struct ExamConflictDetector {
    default_duration_min: u32,
}

impl ExamConflictDetector {
    /// Creates a detector with a two-hour default exam length.
    pub fn new() -> Self {
        Self {
            default_duration_min: DEFAULT_EXAM_DURATION_MIN,
        }
    }

    /// Sets the exam length assumed when the end time is missing.
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_min = minutes;
        self
    }

    /// All conflicts among `sections`, one per course pair and exam kind.
    ///
    /// Pairs of the same course, or of the same section, are skipped.
    /// Sections with a missing or unparseable date never conflict.
    pub fn detect(&self, sections: &[Section]) -> Vec<ExamConflict> {
        let mut found: BTreeMap<(ExamKind, String, String), ExamConflict> = BTreeMap::new();

        for (i, a) in sections.iter().enumerate() {
            for b in &sections[i + 1..] {
                if a.course_code == b.course_code || a.is_same_section(b) {
                    continue;
                }
                for kind in [ExamKind::Midterm, ExamKind::Final] {
                    let (Some(wa), Some(wb)) = (self.window(a, kind), self.window(b, kind)) else {
                        continue;
                    };
                    if wa.date != wb.date
                        || !overlaps(wa.start_min, wa.end_min, wb.start_min, wb.end_min)
                    {
                        continue;
                    }

                    let (first, second) = sorted_pair(&a.course_code, &b.course_code);
                    debug!(?kind, first, second, date = wa.raw_date, "exam conflict");
                    found
                        .entry((kind, first.to_string(), second.to_string()))
                        .or_insert_with(|| ExamConflict {
                            kind,
                            first_course: first.to_string(),
                            second_course: second.to_string(),
                            date: wa.raw_date.to_string(),
                            time: wa.label.clone(),
                        });
                }
            }
        }

        found.into_values().collect()
    }

    fn window<'a>(&self, section: &'a Section, kind: ExamKind) -> Option<ExamWindow<'a>> {
        let schedule = &section.section_schedule;
        let (date, start, end) = match kind {
            ExamKind::Midterm => (
                schedule.mid_exam_date.as_deref()?,
                schedule.mid_exam_start_time.as_deref()?,
                schedule.mid_exam_end_time.as_deref(),
            ),
            ExamKind::Final => (
                schedule.final_exam_date.as_deref()?,
                schedule.final_exam_start_time.as_deref()?,
                schedule.final_exam_end_time.as_deref(),
            ),
        };

        let Some(parsed_date) = normalize_date(date) else {
            trace!(course = %section.course_code, date, "unparseable exam date");
            return None;
        };

        let start_min = parse_minutes(start);
        let end_min = match end.map(parse_minutes) {
            Some(end_min) if end_min > start_min => end_min,
            _ => start_min.saturating_add(self.default_duration_min),
        };
        let label = match end {
            Some(end) => format!("{} - {}", format_12_hour(start), format_12_hour(end)),
            None => format_12_hour(start),
        };

        Some(ExamWindow {
            date: parsed_date,
            raw_date: date,
            start_min,
            end_min,
            label,
        })
    }
}

impl Default for ExamConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds exam conflicts with the default two-hour exam length.
pub fn find_exam_conflicts(sections: &[Section]) -> Vec<ExamConflict> {
    ExamConflictDetector::new().detect(sections)
}

/// Parses an exam date in any accepted spelling.
pub fn normalize_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
}

/// Renders conflicts as a report; `None` when there is nothing to report.
///
/// Conflicts between a course and itself are dropped.
pub fn format_report(conflicts: &[ExamConflict]) -> Option<String> {
    let conflicts: Vec<&ExamConflict> = conflicts
        .iter()
        .filter(|c| c.first_course != c.second_course)
        .collect();
    if conflicts.is_empty() {
        return None;
    }

    let courses: BTreeSet<&str> = conflicts
        .iter()
        .flat_map(|c| [c.first_course.as_str(), c.second_course.as_str()])
        .collect();
    let lines_of = |kind: ExamKind| -> Vec<String> {
        let mut lines: Vec<String> = conflicts
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.report_line())
            .collect();
        lines.sort();
        lines
    };
    let midterm = lines_of(ExamKind::Midterm);
    let finals = lines_of(ExamKind::Final);

    let mut message = format!("{EXAM_CONFLICTS_HEADER}\n\n");
    message.push_str(&format!(
        "{AFFECTED_COURSES_HEADER} {}\n\n",
        courses.into_iter().collect::<Vec<_>>().join(", ")
    ));
    if !midterm.is_empty() {
        message.push_str(MIDTERM_HEADER);
        message.push('\n');
        for line in &midterm {
            message.push_str(line);
            message.push('\n');
        }
    }
    if !finals.is_empty() {
        if !midterm.is_empty() {
            message.push('\n');
        }
        message.push_str(FINAL_HEADER);
        message.push('\n');
        for line in &finals {
            message.push_str(line);
            message.push('\n');
        }
    }

    Some(message.trim().to_string())
}

fn sorted_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::parse_report;

    fn with_midterm(code: &str, date: &str, start: &str, end: &str) -> Section {
        Section::new(code, "01").with_midterm(date, start, end)
    }

    #[test]
    fn test_normalize_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 10);
        assert_eq!(normalize_date("2026-03-10"), expected);
        assert_eq!(normalize_date("10-03-2026"), expected);
        assert_eq!(normalize_date("2026/03/10"), expected);
        assert_eq!(normalize_date("10/03/2026"), expected);
        assert_eq!(normalize_date("next tuesday"), None);
    }

    #[test]
    fn test_overlapping_midterms() {
        let sections = vec![
            with_midterm("CSE111", "2026-03-10", "10:00:00", "12:00:00"),
            with_midterm("CSE110", "10/03/2026", "11:00:00", "13:00:00"),
        ];
        let conflicts = find_exam_conflicts(&sections);
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.kind, ExamKind::Midterm);
        assert_eq!(c.first_course, "CSE110");
        assert_eq!(c.second_course, "CSE111");
        assert_eq!(c.date, "2026-03-10");
        assert_eq!(c.time, "10:00 AM - 12:00 PM");
    }

    #[test]
    fn test_back_to_back_exams_do_not_conflict() {
        let sections = vec![
            with_midterm("CSE110", "2026-03-10", "09:00:00", "11:00:00"),
            with_midterm("MAT110", "2026-03-10", "11:00:00", "13:00:00"),
        ];
        assert!(find_exam_conflicts(&sections).is_empty());
    }

    #[test]
    fn test_different_dates_do_not_conflict() {
        let sections = vec![
            with_midterm("CSE110", "2026-03-10", "10:00:00", "12:00:00"),
            with_midterm("MAT110", "2026-03-11", "10:00:00", "12:00:00"),
        ];
        assert!(find_exam_conflicts(&sections).is_empty());
    }

    #[test]
    fn test_same_course_skipped() {
        let sections = vec![
            Section::new("CSE110", "01").with_midterm("2026-03-10", "10:00:00", "12:00:00"),
            Section::new("CSE110", "02").with_midterm("2026-03-10", "10:00:00", "12:00:00"),
        ];
        assert!(find_exam_conflicts(&sections).is_empty());
    }

    #[test]
    fn test_missing_end_uses_default_duration() {
        let mut a = Section::new("CSE110", "01");
        a.section_schedule.final_exam_date = Some("2026-05-02".into());
        a.section_schedule.final_exam_start_time = Some("09:00:00".into());
        let b = Section::new("PHY111", "01").with_final("2026-05-02", "10:30:00", "12:30:00");
        let sections = vec![a, b];

        let conflicts = find_exam_conflicts(&sections);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ExamKind::Final);
        assert_eq!(conflicts[0].time, "9:00 AM");

        let short = ExamConflictDetector::new()
            .with_default_duration(60)
            .detect(&sections);
        assert!(short.is_empty());
    }

    #[test]
    fn test_one_conflict_per_pair_and_kind() {
        let sections = vec![
            with_midterm("CSE110", "2026-03-10", "10:00:00", "12:00:00"),
            Section::new("CSE111", "01").with_midterm("2026-03-10", "10:00:00", "12:00:00"),
            Section::new("CSE111", "02").with_midterm("2026-03-10", "11:00:00", "13:00:00"),
        ];
        assert_eq!(find_exam_conflicts(&sections).len(), 1);
    }

    #[test]
    fn test_format_report_none_when_empty() {
        assert!(format_report(&[]).is_none());
    }

    #[test]
    fn test_format_report_layout() {
        let conflicts = vec![
            ExamConflict {
                kind: ExamKind::Final,
                first_course: "CSE110".into(),
                second_course: "MAT110".into(),
                date: "2026-05-02".into(),
                time: "9:00 AM - 11:00 AM".into(),
            },
            ExamConflict {
                kind: ExamKind::Midterm,
                first_course: "CSE110".into(),
                second_course: "CSE111".into(),
                date: "2026-03-10".into(),
                time: "10:00 AM - 12:00 PM".into(),
            },
        ];

        let report = format_report(&conflicts).unwrap();
        assert_eq!(
            report,
            "Exam Conflicts\n\n\
             Affected Courses: CSE110, CSE111, MAT110\n\n\
             Midterm Conflicts\n\
             CSE110 ↔ CSE111: 2026-03-10, 10:00 AM - 12:00 PM\n\n\
             Final Conflicts\n\
             CSE110 ↔ MAT110: 2026-05-02, 9:00 AM - 11:00 AM"
        );
    }

    #[test]
    fn test_report_round_trip_through_parser() {
        let sections = vec![
            with_midterm("CSE110", "2026-03-10", "10:00:00", "12:00:00")
                .with_final("2026-05-02", "09:00:00", "11:00:00"),
            with_midterm("CSE111", "2026-03-10", "11:00:00", "13:00:00"),
            Section::new("MAT110", "04").with_final("02-05-2026", "10:00:00", "12:00:00"),
        ];

        let conflicts = find_exam_conflicts(&sections);
        let text = format_report(&conflicts).unwrap();
        let report = parse_report(&text);

        let affected: Vec<&str> = report.affected_courses.iter().map(String::as_str).collect();
        assert_eq!(affected, vec!["CSE110", "CSE111", "MAT110"]);
        assert_eq!(report.midterm_conflicts.len(), 1);
        assert_eq!(report.final_conflicts.len(), 1);
        assert!(report.midterm_conflicts[0].starts_with("CSE110 ↔ CSE111"));
        assert!(report.final_conflicts[0].starts_with("CSE110 ↔ MAT110"));
    }
}
