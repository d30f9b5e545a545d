//! Weekday mood patterns and the check-in streak

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use super::calendar::Calendar;
use super::models::MoodPattern;
use crate::journal::MoodEntry;

/// Weekday average below this counts as a typical low day (1-6 scale)
const LOW_DAY_THRESHOLD: f64 = 3.0;

/// Weekday average at or above this counts as a typical high day
const HIGH_DAY_THRESHOLD: f64 = 4.5;

/// Compute weekday averages, low/high days and the current streak
pub fn mood_patterns(entries: &[MoodEntry], today: NaiveDate, calendar: &Calendar) -> MoodPattern {
    let mut totals: HashMap<String, (f64, u32)> = HashMap::new();

    for entry in entries {
        let day_name = weekday_name(calendar.day_of(entry.timestamp).weekday());
        let bucket = totals.entry(day_name.to_string()).or_insert((0.0, 0));
        bucket.0 += entry.score as f64;
        bucket.1 += 1;
    }

    let day_of_week_averages: HashMap<String, f64> = totals
        .iter()
        .map(|(day, (total, count))| (day.clone(), total / *count as f64))
        .collect();

    let typical_low_days: Vec<String> = day_of_week_averages
        .iter()
        .filter(|(_, avg)| **avg < LOW_DAY_THRESHOLD)
        .map(|(day, _)| day.clone())
        .collect();

    let typical_high_days: Vec<String> = day_of_week_averages
        .iter()
        .filter(|(_, avg)| **avg >= HIGH_DAY_THRESHOLD)
        .map(|(day, _)| day.clone())
        .collect();

    let current_streak = current_streak(entries, today, calendar);

    MoodPattern {
        day_of_week_averages,
        current_streak,
        typical_low_days,
        typical_high_days,
    }
}

/// Consecutive days with at least one entry, counting back from today.
///
/// Today may still be mood-less without breaking the streak; a run ending
/// yesterday still counts.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate, calendar: &Calendar) -> u32 {
    let days: HashSet<NaiveDate> = entries
        .iter()
        .map(|entry| calendar.day_of(entry.timestamp))
        .collect();
    if days.is_empty() {
        return 0;
    }

    let mut check = today;
    if !days.contains(&check) {
        match check.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => check = yesterday,
            _ => return 0,
        }
    }

    let mut streak = 0;
    while days.contains(&check) {
        streak += 1;
        match check.pred_opt() {
            Some(prev) => check = prev,
            None => break,
        }
    }

    streak
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::journal::Mood;

    fn entry(day: u32, score: u8) -> MoodEntry {
        let mood = Mood::from_score(score).unwrap();
        MoodEntry {
            id: Uuid::new_v4(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
            mood,
            score,
            comment: String::new(),
        }
    }

    #[test]
    fn test_weekday_averages() {
        let calendar = Calendar::utc();
        // 2026-03-02 and 2026-03-09 are both Mondays
        let entries = vec![entry(2, 6), entry(9, 3), entry(3, 1)];

        let pattern = mood_patterns(
            &entries,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            &calendar,
        );

        assert_eq!(pattern.day_of_week_averages["monday"], 4.5);
        assert_eq!(pattern.day_of_week_averages["tuesday"], 1.0);
        assert!(pattern.typical_high_days.contains(&"monday".to_string()));
        assert!(pattern.typical_low_days.contains(&"tuesday".to_string()));
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let calendar = Calendar::utc();
        let entries = vec![entry(8, 4), entry(9, 4), entry(10, 4)];

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(current_streak(&entries, today, &calendar), 3);
    }

    #[test]
    fn test_streak_survives_missing_today() {
        let calendar = Calendar::utc();
        let entries = vec![entry(8, 4), entry(9, 4)];

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(current_streak(&entries, today, &calendar), 2);
    }

    #[test]
    fn test_streak_broken_by_gap() {
        let calendar = Calendar::utc();
        let entries = vec![entry(5, 4), entry(6, 4), entry(9, 4)];

        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(current_streak(&entries, today, &calendar), 1);
    }

    #[test]
    fn test_streak_zero_without_recent_entries() {
        let calendar = Calendar::utc();
        let entries = vec![entry(1, 4)];

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(current_streak(&entries, today, &calendar), 0);
        assert_eq!(current_streak(&[], today, &calendar), 0);
    }
}
