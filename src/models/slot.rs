//! Display time slots.
//!
//! The routine grid has fixed rows: seven ~80-minute windows from
//! 8:00 AM to 6:20 PM. Slots are static configuration and are never
//! derived from section data.
//!
//! # Time Model
//! Slot bounds are minutes since midnight. Windows are half-open
//! `[start, end)`, so a meeting ending exactly at a slot's start does
//! not land in that slot.

use serde::{Deserialize, Serialize};

use crate::time::{overlaps, parse_minutes};

/// Labels of the standard slots, in display order.
pub const STANDARD_SLOTS: [&str; 7] = [
    "8:00 AM-9:20 AM",
    "9:30 AM-10:50 AM",
    "11:00 AM-12:20 PM",
    "12:30 PM-1:50 PM",
    "2:00 PM-3:20 PM",
    "3:30 PM-4:50 PM",
    "5:00 PM-6:20 PM",
];

/// One display window of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Display label (e.g., `"8:00 AM-9:20 AM"`).
    pub label: String,
    /// Window start (minutes, inclusive).
    pub start_min: u32,
    /// Window end (minutes, exclusive).
    pub end_min: u32,
}

impl TimeSlot {
    /// Creates a slot from explicit bounds.
    pub fn new(label: impl Into<String>, start_min: u32, end_min: u32) -> Self {
        Self {
            label: label.into(),
            start_min,
            end_min,
        }
    }

    /// Parses a `"start-end"` label such as `"2:00 PM-3:20 PM"`.
    ///
    /// Bounds go through [`parse_minutes`], so malformed halves
    /// degrade to midnight like any other time string.
    pub fn from_label(label: &str) -> Self {
        let (start, end) = label.split_once('-').unwrap_or((label, ""));
        Self::new(label, parse_minutes(start), parse_minutes(end))
    }

    /// The seven standard slots.
    pub fn standard() -> Vec<Self> {
        STANDARD_SLOTS.iter().map(|l| Self::from_label(l)).collect()
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a meeting `[start_min, end_min)` overlaps this slot.
    #[inline]
    pub fn overlaps(&self, start_min: u32, end_min: u32) -> bool {
        overlaps(start_min, end_min, self.start_min, self.end_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slots() {
        let slots = TimeSlot::standard();
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0], TimeSlot::new("8:00 AM-9:20 AM", 480, 560));
        assert_eq!(slots[2].start_min, 660); // 11:00 AM
        assert_eq!(slots[2].end_min, 740); // 12:20 PM
        assert_eq!(slots[6].end_min, 1100); // 6:20 PM
        assert!(slots.iter().all(|s| s.duration_min() == 80));
    }

    #[test]
    fn test_slots_do_not_overlap_each_other() {
        let slots = TimeSlot::standard();
        for pair in slots.windows(2) {
            assert!(pair[0].end_min <= pair[1].start_min);
        }
    }

    #[test]
    fn test_slot_overlap_boundaries() {
        let slot = TimeSlot::new("x", 480, 560);
        assert!(slot.overlaps(500, 520));
        assert!(slot.overlaps(400, 481));
        assert!(!slot.overlaps(560, 600)); // touching end
        assert!(!slot.overlaps(400, 480)); // touching start
    }

    #[test]
    fn test_from_label_malformed() {
        let slot = TimeSlot::from_label("whenever");
        assert_eq!(slot.start_min, 0);
        assert_eq!(slot.end_min, 0);
    }
}
