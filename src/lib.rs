//! Course routine engine.
//!
//! Projects course sections onto a fixed weekly time grid, checks that a
//! generated routine only meets on days the user selected, and turns the
//! plain-text exam-conflict report emitted by routine generation into
//! structured data.
//!
//! # Modules
//!
//! - **`models`**: Wire types (`Section`, `MeetingTime`, `LabSchedules`,
//!   `RoutinePayload`) and the normalized `CanonicalEntry` / `TimeSlot`
//! - **`time`**: Time-string parsing and interval overlap
//! - **`normalize`**: Reduces class and lab schedules to canonical entries
//! - **`room`**: Picks the room for one day out of a composite room field
//! - **`grid`**: Day × slot placement grid
//! - **`validation`**: Day-coverage gate for generated routines
//! - **`clash`**: Class/lab time clashes within and across sections
//! - **`conflict`**: Exam-conflict detection and report parsing
//!
//! # Example
//!
//! ```
//! use routine_grid::grid::build_grid;
//! use routine_grid::models::{MeetingTime, Section};
//!
//! let section = Section::new("CSE110", "01")
//!     .with_class(MeetingTime::new("MONDAY", "09:30:00", "10:50:00").with_room("UB40201"));
//!
//! let sections = vec![section];
//! let grid = build_grid(&sections, &["Monday"]);
//! assert_eq!(grid.placement_count(), 1);
//! ```
//!
//! All operations are pure and synchronous. Callers that rebuild grids in
//! response to rapid input changes should render only the latest result.

pub mod clash;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod models;
pub mod normalize;
pub mod room;
pub mod time;
pub mod validation;

pub use error::{Error, Result};
