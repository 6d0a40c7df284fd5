//! Routine grid assembly.
//!
//! Projects every class and lab meeting of a routine onto a
//! day × [`TimeSlot`] matrix for display.
//!
//! # Placement Rules
//! - Only selected days get cells; meetings on other days are skipped
//!   (day mismatches are reported by [`crate::validation`], not here).
//! - A meeting lands in *every* slot whose window it overlaps. Meetings
//!   are never split or merged across slots.
//! - The grid is rebuilt from scratch on every call.

use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{canonical_day, canonical_day_set, EntryKind, Section, TimeSlot};
use crate::normalize::section_entries;
use crate::room::resolve_for_day;
use crate::time::time_label;

/// A meeting placed in one grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct Placement<'a> {
    /// Class or lab.
    pub kind: EntryKind,
    /// Owning section.
    pub section: &'a Section,
    /// Display time (`"9:30 AM - 10:50 AM"`).
    pub time_label: String,
    /// Canonical day.
    pub day: String,
    /// Room for this day, `"TBA"` when unknown.
    pub room: String,
}

/// Day × slot placement matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Grid<'a> {
    days: Vec<String>,
    slots: Vec<TimeSlot>,
    /// `cells[day_index][slot_index]`
    cells: Vec<Vec<Vec<Placement<'a>>>>,
}

impl<'a> Grid<'a> {
    fn empty(days: Vec<String>, slots: Vec<TimeSlot>) -> Self {
        let cells = days
            .iter()
            .map(|_| slots.iter().map(|_| Vec::new()).collect())
            .collect();
        Self { days, slots, cells }
    }

    /// Selected days, canonical, in selection order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Slot rows, in display order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Placements of one cell.
    ///
    /// `day` is matched in any casing. Returns an empty slice for days
    /// outside the grid or out-of-range slots.
    pub fn cell(&self, day: &str, slot_index: usize) -> &[Placement<'a>] {
        self.day_index(day)
            .and_then(|d| self.cells[d].get(slot_index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Placements of the cell identified by slot label.
    pub fn cell_by_label(&self, day: &str, slot_label: &str) -> &[Placement<'a>] {
        match self.slots.iter().position(|s| s.label == slot_label) {
            Some(i) => self.cell(day, i),
            None => &[],
        }
    }

    /// Iterates over `(day, slot, placement)` in day-then-slot order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &TimeSlot, &Placement<'a>)> {
        self.days.iter().zip(&self.cells).flat_map(move |(day, row)| {
            self.slots
                .iter()
                .zip(row)
                .flat_map(move |(slot, cell)| cell.iter().map(move |p| (day.as_str(), slot, p)))
        })
    }

    /// Total number of placements across all cells.
    pub fn placement_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Whether no meeting was placed.
    pub fn is_empty(&self) -> bool {
        self.placement_count() == 0
    }

    fn day_index(&self, day: &str) -> Option<usize> {
        let day = canonical_day(day);
        self.days.iter().position(|d| *d == day)
    }
}

/// Builds routine grids over a configurable slot list.
///
/// # Usage
///
/// ```
/// use routine_grid::grid::GridBuilder;
/// use routine_grid::models::{MeetingTime, Section, TimeSlot};
///
/// let sections = vec![Section::new("CSE110", "01")
///     .with_class(MeetingTime::new("Monday", "9:00 AM", "10:00 AM"))];
///
/// let builder = GridBuilder::new().with_slots(vec![
///     TimeSlot::from_label("8:00 AM-9:20 AM"),
///     TimeSlot::from_label("9:30 AM-10:50 AM"),
/// ]);
/// let grid = builder.build(&sections, &["Monday"]);
/// assert_eq!(grid.placement_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    slots: Vec<TimeSlot>,
}

impl GridBuilder {
    /// Creates a builder over the standard seven slots.
    pub fn new() -> Self {
        Self {
            slots: TimeSlot::standard(),
        }
    }

    /// Replaces the slot list.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Configured slots.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Builds the grid for `sections` restricted to `selected_days`.
    ///
    /// Day names are canonicalized and deduplicated. Empty inputs give an
    /// empty (but fully initialized) grid.
    pub fn build<'a, S: AsRef<str>>(
        &self,
        sections: &'a [Section],
        selected_days: &[S],
    ) -> Grid<'a> {
        let mut grid = Grid::empty(canonical_day_set(selected_days), self.slots.clone());

        for section in sections {
            for entry in section_entries(section) {
                let Some(day_index) = grid.day_index(&entry.day) else {
                    trace!(
                        course = %section.course_code,
                        day = %entry.day,
                        "meeting on unselected day, skipped"
                    );
                    continue;
                };

                let (start, end) = (entry.start_min(), entry.end_min());
                let label = time_label(&entry.start_time, &entry.end_time);
                let room = resolve_for_day(&entry.room, &entry.day);

                for (slot_index, slot) in self.slots.iter().enumerate() {
                    if slot.overlaps(start, end) {
                        grid.cells[day_index][slot_index].push(Placement {
                            kind: entry.kind,
                            section,
                            time_label: label.clone(),
                            day: entry.day.clone(),
                            room: room.clone(),
                        });
                    }
                }
            }
        }

        debug!(
            sections = sections.len(),
            days = grid.days.len(),
            placements = grid.placement_count(),
            "routine grid built"
        );
        grid
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a grid over the standard slots.
pub fn build_grid<'a, S: AsRef<str>>(
    sections: &'a [Section],
    selected_days: &[S],
) -> Grid<'a> {
    GridBuilder::new().build(sections, selected_days)
}
