//! The full derived-view bundle recomputed per snapshot

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{self, Calendar};
use super::models::{MonthCursor, MonthGrid, MoodPattern, SummaryStats, TrendPoint};
use super::{patterns, series, summary, trend};
use crate::journal::{normalize, MoodEntry, RawMoodRecord};

/// Everything the presentation layer renders, derived from one snapshot.
///
/// Computed wholesale and swapped in as a unit: readers see either the
/// previous bundle or this one, never a mix of the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// Normalized entries ascending by timestamp, ready for charting
    pub series: Vec<MoodEntry>,
    /// Chart annotations where the series crosses a calendar day
    pub day_boundaries: Vec<DateTime<Utc>>,
    /// Two regression endpoints, or empty when no line can be drawn
    pub trend: Vec<TrendPoint>,
    /// Mean score per day, over all entries
    pub daily_averages: BTreeMap<NaiveDate, f64>,
    /// Calendar cells for the month under the cursor
    pub month_grid: MonthGrid,
    /// Today's count and the sentiment message
    pub summary: SummaryStats,
    /// Weekday averages and the check-in streak
    pub patterns: MoodPattern,
}

impl DashboardViews {
    /// Recompute every derived view from a raw snapshot.
    ///
    /// This is the single recomputation entry point, invoked after an append
    /// or a month navigation. The whole bundle is rebuilt in O(entry count);
    /// there is no incremental update.
    pub fn compute(
        records: &[RawMoodRecord],
        cursor: MonthCursor,
        now: DateTime<Utc>,
        calendar: &Calendar,
    ) -> Self {
        let entries = normalize(records);
        let today = calendar.day_of(now);

        let day_boundaries = series::day_boundaries(&entries, calendar);
        let trend = trend::linear_trend(&entries);
        let daily_averages = calendar::daily_averages(&entries, calendar);
        let month_grid = calendar::month_grid(cursor, &daily_averages);
        let summary = summary::summary_stats(&entries, today, calendar);
        let patterns = patterns::mood_patterns(&entries, today, calendar);

        Self {
            series: entries,
            day_boundaries,
            trend,
            daily_averages,
            month_grid,
            summary,
            patterns,
        }
    }

    /// Entries recorded on one local day, for the drill-down view
    pub fn entries_on_day(&self, day: NaiveDate, calendar: &Calendar) -> Vec<MoodEntry> {
        series::entries_on_day(&self.series, day, calendar)
    }
}
