//! Least-squares trend line over the mood series

use super::models::TrendPoint;
use crate::journal::MoodEntry;

/// Two-point trend line over the full series.
///
/// Ordinary least squares of score against timestamp seconds, evaluated at
/// the first and last timestamps of the series. Fewer than 2 entries, or a
/// series whose timestamps are all identical, yields an empty result: the
/// chart simply draws no trend line.
pub fn linear_trend(entries: &[MoodEntry]) -> Vec<TrendPoint> {
    if entries.len() < 2 {
        return Vec::new();
    }

    let n = entries.len() as f64;
    let xs: Vec<f64> = entries
        .iter()
        .map(|entry| entry.timestamp.timestamp() as f64)
        .collect();
    let ys: Vec<f64> = entries.iter().map(|entry| entry.score as f64).collect();

    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        sxy += (x - x_mean) * (y - y_mean);
        sxx += (x - x_mean) * (x - x_mean);
    }

    if sxx == 0.0 {
        return Vec::new();
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let first = entries[0].timestamp;
    let last = entries[entries.len() - 1].timestamp;
    vec![
        TrendPoint {
            date: first,
            score: slope * first.timestamp() as f64 + intercept,
        },
        TrendPoint {
            date: last,
            score: slope * last.timestamp() as f64 + intercept,
        },
    ]
}
