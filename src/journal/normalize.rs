//! Raw record validation and ordering

use super::models::{MoodEntry, RawMoodRecord};
use super::scale::Mood;

/// Convert raw stored records into validated, scored entries sorted by time.
///
/// Records missing a timestamp or carrying a symbol outside the palette are
/// dropped silently so legacy or partial rows degrade to absence instead of
/// blocking every derived view. An absent comment becomes the empty string.
/// The sort is stable: entries sharing a timestamp keep their input order.
pub fn normalize(records: &[RawMoodRecord]) -> Vec<MoodEntry> {
    let mut entries: Vec<MoodEntry> = records
        .iter()
        .filter_map(|record| {
            let timestamp = record.timestamp?;
            let mood = Mood::from_symbol(record.symbol.as_deref()?)?;
            Some(MoodEntry {
                id: record.id,
                timestamp,
                mood,
                score: mood.score(),
                comment: record.comment.clone().unwrap_or_default(),
            })
        })
        .collect();

    let dropped = records.len() - entries.len();
    if dropped > 0 {
        log::debug!("Dropped {} malformed mood record(s)", dropped);
    }

    entries.sort_by_key(|entry| entry.timestamp);
    entries
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn raw(hour: u32, symbol: Option<&str>, comment: Option<&str>) -> RawMoodRecord {
        RawMoodRecord {
            id: Uuid::new_v4(),
            timestamp: Some(Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()),
            symbol: symbol.map(String::from),
            comment: comment.map(String::from),
        }
    }

    #[test]
    fn test_drops_missing_timestamp() {
        let mut record = raw(9, Some("😄"), Some("ok"));
        record.timestamp = None;
        assert!(normalize(&[record]).is_empty());
    }

    #[test]
    fn test_drops_unknown_symbol() {
        let records = vec![raw(9, Some("🤖"), None), raw(10, None, Some("no mood"))];
        assert!(normalize(&records).is_empty());
    }

    #[test]
    fn test_missing_comment_becomes_empty() {
        let entries = normalize(&[raw(9, Some("😊"), None)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "");
        assert_eq!(entries[0].mood, Mood::Good);
        assert_eq!(entries[0].score, 5);
    }

    #[test]
    fn test_sorts_ascending_keeping_tied_order() {
        let a = raw(18, Some("😄"), Some("evening"));
        let b = raw(9, Some("😟"), Some("morning"));
        let c = {
            let mut c = raw(9, Some("🙂"), Some("also morning"));
            c.timestamp = b.timestamp;
            c
        };
        let entries = normalize(&[a, b.clone(), c.clone()]);

        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|p| p[0].timestamp <= p[1].timestamp));
        // Tied timestamps keep input order
        assert_eq!(entries[0].id, b.id);
        assert_eq!(entries[1].id, c.id);
        assert_eq!(entries[2].comment, "evening");
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            raw(18, Some("😄"), None),
            raw(9, Some("😟"), Some("rough start")),
            raw(12, Some("🤖"), None),
        ];
        assert_eq!(normalize(&records), normalize(&records));
    }
}
