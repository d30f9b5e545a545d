//! Chart time series: day boundaries and day drill-down

use chrono::{DateTime, NaiveDate, Utc};

use super::calendar::Calendar;
use crate::journal::MoodEntry;

/// Timestamps where the ascending series crosses a calendar day.
///
/// For each adjacent pair whose local days differ, the later entry's
/// timestamp is emitted; 0 or 1 entries produce no markers.
pub fn day_boundaries(entries: &[MoodEntry], calendar: &Calendar) -> Vec<DateTime<Utc>> {
    entries
        .windows(2)
        .filter(|pair| calendar.day_of(pair[0].timestamp) != calendar.day_of(pair[1].timestamp))
        .map(|pair| pair[1].timestamp)
        .collect()
}

/// Entries recorded on one local calendar day, ascending.
///
/// An empty result is a defined state (no records that day), not an error.
pub fn entries_on_day(entries: &[MoodEntry], day: NaiveDate, calendar: &Calendar) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|entry| calendar.day_of(entry.timestamp) == day)
        .cloned()
        .collect()
}
