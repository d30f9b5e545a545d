//! Personal mood journal core.
//!
//! Entries (emoji mood plus optional comment) are appended to a file-backed
//! store. Every derived view the UI renders (chart series with day-boundary
//! markers, two-point trend line, per-day averages for the calendar
//! heat-map, sentiment summary, weekday patterns) is recomputed wholesale
//! from the current snapshot and swapped in as one bundle.

pub mod analytics;
pub mod journal;

pub use analytics::{Calendar, DashboardViews, MonthCursor};
pub use journal::{JournalStorage, Mood, MoodEntry, NewEntryRequest, StorageError};
