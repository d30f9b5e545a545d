//! Derived-view data models (computed, not stored)

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One endpoint of the regression line drawn over the mood chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Timestamp of the series' first or last entry
    pub date: DateTime<Utc>,
    /// Regression line value at that instant
    pub score: f64,
}

/// One cell of the month calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// Day number 1..=days_in_month
    pub day: u32,
    /// Calendar date of the cell
    pub date: NaiveDate,
    /// Mean score of that day's entries, absent when nothing was recorded
    pub average: Option<f64>,
}

/// The calendar grid for one displayed month.
///
/// `leading_blanks` pads the first row so column 0 is always Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

/// The month currently displayed in the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Cursor at the month containing `day`
    pub fn at(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    /// Move one month back
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Move one month forward
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

/// Categorical sentiment over the most recent entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryMessage {
    VeryGood,
    Mixed,
    Low,
    NotEnough,
    Empty,
}

/// Headline numbers for the journal screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Entries recorded on the current local day
    pub today_count: usize,
    /// Sentiment over the recent-entry window
    pub message: SummaryMessage,
}

/// Computed weekday patterns (not stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPattern {
    /// Average score by day of week ("monday" -> 4.2)
    pub day_of_week_averages: HashMap<String, f64>,
    /// Consecutive days with entries ending today or yesterday
    pub current_streak: u32,
    /// Days of week averaging below the low threshold
    pub typical_low_days: Vec<String>,
    /// Days of week averaging at or above the high threshold
    pub typical_high_days: Vec<String>,
}
