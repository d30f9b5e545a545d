//! Entry counts and the rolling sentiment message

use chrono::NaiveDate;

use super::calendar::Calendar;
use super::models::{SummaryMessage, SummaryStats};
use crate::journal::MoodEntry;

/// How many of the most recent entries the sentiment message looks at
const ANALYSIS_WINDOW: usize = 5;

/// Window average at or above this reads as a very good stretch
const VERY_GOOD_THRESHOLD: f64 = 5.0;

/// Window average at or above this reads as mixed; below it as low
const MIXED_THRESHOLD: f64 = 3.5;

/// Number of entries recorded on `today`'s local calendar day
pub fn today_count(entries: &[MoodEntry], today: NaiveDate, calendar: &Calendar) -> usize {
    entries
        .iter()
        .filter(|entry| calendar.day_of(entry.timestamp) == today)
        .count()
}

/// Categorical sentiment over the recent-entry window.
///
/// The window is the tail of the ascending series: the 5 chronologically
/// most recent entries.
pub fn analysis_message(entries: &[MoodEntry]) -> SummaryMessage {
    if entries.is_empty() {
        return SummaryMessage::Empty;
    }

    let window = &entries[entries.len().saturating_sub(ANALYSIS_WINDOW)..];
    if window.is_empty() {
        // Normalized entries always carry a score; this state is only
        // reachable for callers that pre-filter the window themselves.
        return SummaryMessage::NotEnough;
    }

    let avg = window.iter().map(|entry| entry.score as f64).sum::<f64>() / window.len() as f64;
    if avg >= VERY_GOOD_THRESHOLD {
        SummaryMessage::VeryGood
    } else if avg >= MIXED_THRESHOLD {
        SummaryMessage::Mixed
    } else {
        SummaryMessage::Low
    }
}

/// Today's count plus the sentiment message
pub fn summary_stats(entries: &[MoodEntry], today: NaiveDate, calendar: &Calendar) -> SummaryStats {
    SummaryStats {
        today_count: today_count(entries, today, calendar),
        message: analysis_message(entries),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::journal::Mood;

    fn entry(day: u32, hour: u32, score: u8) -> MoodEntry {
        let mood = Mood::from_score(score).unwrap();
        MoodEntry {
            id: Uuid::new_v4(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap(),
            mood,
            score,
            comment: String::new(),
        }
    }

    fn entries_with_scores(scores: &[u8]) -> Vec<MoodEntry> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| entry(1 + i as u32, 9, score))
            .collect()
    }

    #[test]
    fn test_empty_journal() {
        assert_eq!(analysis_message(&[]), SummaryMessage::Empty);
    }

    #[test]
    fn test_average_exactly_five_is_very_good() {
        let entries = entries_with_scores(&[5, 5, 5, 5, 5]);
        assert_eq!(analysis_message(&entries), SummaryMessage::VeryGood);
    }

    #[test]
    fn test_average_exactly_three_and_a_half_is_mixed() {
        // 3 and 4 average exactly to the 3.5 threshold
        let entries = entries_with_scores(&[3, 4]);
        assert_eq!(analysis_message(&entries), SummaryMessage::Mixed);
    }

    #[test]
    fn test_just_below_very_good_is_mixed() {
        let entries = entries_with_scores(&[5, 5, 5, 5, 4]);
        assert_eq!(analysis_message(&entries), SummaryMessage::Mixed);
    }

    #[test]
    fn test_below_mixed_threshold_is_low() {
        let entries = entries_with_scores(&[3, 3, 4, 3, 3]);
        assert_eq!(analysis_message(&entries), SummaryMessage::Low);
    }

    #[test]
    fn test_window_is_most_recent_five() {
        // Six entries: the oldest is Great, the five recent ones are all Awful.
        // A head-of-series window would report Mixed; the tail reports Low.
        let entries = entries_with_scores(&[6, 1, 1, 1, 1, 1]);
        assert_eq!(analysis_message(&entries), SummaryMessage::Low);
    }

    #[test]
    fn test_short_series_uses_what_exists() {
        let entries = entries_with_scores(&[5, 5]);
        assert_eq!(analysis_message(&entries), SummaryMessage::VeryGood);
    }

    #[test]
    fn test_today_count() {
        let calendar = Calendar::utc();
        let entries = vec![entry(1, 9, 6), entry(1, 18, 3), entry(2, 9, 5)];

        let day1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let elsewhere = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        assert_eq!(today_count(&entries, day1, &calendar), 2);
        assert_eq!(today_count(&entries, elsewhere, &calendar), 0);
    }

    #[test]
    fn test_summary_stats_bundle() {
        let calendar = Calendar::utc();
        let entries = vec![entry(1, 9, 6), entry(1, 18, 5)];

        let day1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let stats = summary_stats(&entries, day1, &calendar);
        assert_eq!(stats.today_count, 2);
        assert_eq!(stats.message, SummaryMessage::VeryGood);
    }
}
