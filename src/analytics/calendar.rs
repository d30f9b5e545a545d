//! Calendar context, daily aggregation and the month grid

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, Offset, Utc};

use super::models::{DayCell, MonthCursor, MonthGrid};
use crate::journal::MoodEntry;

/// Gradient endpoint for the lowest daily average (score 1)
const LOW_COLOR: (u8, u8, u8) = (231, 111, 81);
/// Gradient endpoint for the highest daily average (score 6)
const HIGH_COLOR: (u8, u8, u8) = (87, 187, 138);

/// The single local calendar used for every day grouping.
///
/// All components bucket entries through the same fixed offset so chart
/// day boundaries, calendar cells and day drill-downs never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Calendar {
    /// Calendar fixed to the host timezone's offset at construction
    pub fn local() -> Self {
        Self {
            offset: *Local::now().offset(),
        }
    }

    /// UTC calendar, used by tests to avoid host-dependent day boundaries
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Calendar at an explicit fixed offset
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Local calendar day of a UTC instant
    pub fn day_of(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.offset).date_naive()
    }

    /// Local calendar day of the current instant
    pub fn today(&self) -> NaiveDate {
        self.day_of(Utc::now())
    }
}

/// Per-day arithmetic mean of entry scores, over all entries.
///
/// Global, not month-scoped; days without entries have no key.
pub fn daily_averages(entries: &[MoodEntry], calendar: &Calendar) -> BTreeMap<NaiveDate, f64> {
    let mut totals: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for entry in entries {
        let bucket = totals
            .entry(calendar.day_of(entry.timestamp))
            .or_insert((0.0, 0));
        bucket.0 += entry.score as f64;
        bucket.1 += 1;
    }

    totals
        .into_iter()
        .map(|(day, (total, count))| (day, total / count as f64))
        .collect()
}

/// Build the calendar grid for the month under the cursor.
///
/// One cell per day 1..=days_in_month, each carrying that day's average when
/// one exists. Leading blanks follow the Sunday-first convention: weekdays
/// numbered 1=Sunday..7=Saturday, blanks = (weekday_of_first + 6) mod 7.
pub fn month_grid(cursor: MonthCursor, averages: &BTreeMap<NaiveDate, f64>) -> MonthGrid {
    let Some(first) = NaiveDate::from_ymd_opt(cursor.year, cursor.month, 1) else {
        return MonthGrid {
            year: cursor.year,
            month: cursor.month,
            leading_blanks: 0,
            cells: Vec::new(),
        };
    };

    let leading_blanks = (first.weekday().number_from_sunday() + 6) % 7;
    let days = days_in_month(first);

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = first + Days::new((day - 1) as u64);
        cells.push(DayCell {
            day,
            date,
            average: averages.get(&date).copied(),
        });
    }

    MonthGrid {
        year: cursor.year,
        month: cursor.month,
        leading_blanks,
        cells,
    }
}

/// Heat-map color for a day's average score.
///
/// Returns None for missing data (average <= 0); otherwise interpolates
/// between the low-mood and high-mood gradient endpoints.
pub fn color_for_average(average: f64) -> Option<(u8, u8, u8)> {
    if average <= 0.0 {
        return None;
    }

    let n = (average - 1.0).clamp(0.0, 5.0) / 5.0;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * n).round() as u8;
    Some((
        lerp(LOW_COLOR.0, HIGH_COLOR.0),
        lerp(LOW_COLOR.1, HIGH_COLOR.1),
        lerp(LOW_COLOR.2, HIGH_COLOR.2),
    ))
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_first {
        Some(next_first) => (next_first - first).num_days() as u32,
        None => 0,
    }
}
