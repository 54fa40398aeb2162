//! History aggregation.
//!
//! Folds a user's persisted mood records into a time-ordered view and
//! summary statistics. Tolerates an empty collection and assumes no
//! ordering guarantee from the store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionLabel;

use super::MoodRecord;

/// Aggregated view over a user's mood history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Total number of records aggregated
    pub total_records: usize,
    /// Records ordered most recent first; ties keep their original
    /// relative order
    pub sorted: Vec<MoodRecord>,
    /// Occurrence count per emotion actually present; zero-count labels
    /// are absent
    pub emotion_counts: HashMap<EmotionLabel, usize>,
    /// Most frequent emotion; `None` when there are no records
    pub most_frequent: Option<EmotionLabel>,
    /// Mean confidence as a percentage, rounded to one decimal; 0.0 when
    /// there are no records
    pub average_confidence_pct: f64,
}

impl HistorySummary {
    /// The `limit` most recent records
    pub fn recent(&self, limit: usize) -> &[MoodRecord] {
        &self.sorted[..self.sorted.len().min(limit)]
    }
}

/// Aggregate a collection of mood records into a history summary.
pub fn aggregate(records: &[MoodRecord]) -> HistorySummary {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| std::cmp::Reverse(record.normalized_timestamp()));

    let mut emotion_counts: HashMap<EmotionLabel, usize> = HashMap::new();
    for record in records {
        *emotion_counts.entry(record.emotion).or_insert(0) += 1;
    }

    // Distinct labels in encounter order, stable-sorted ascending by count,
    // last taken. Ties therefore resolve to the latest-encountered of the
    // tied labels, not the first-seen one.
    let mut distinct: Vec<EmotionLabel> = Vec::new();
    for record in records {
        if !distinct.contains(&record.emotion) {
            distinct.push(record.emotion);
        }
    }
    distinct.sort_by_key(|label| emotion_counts.get(label).copied().unwrap_or(0));
    let most_frequent = distinct.last().copied();

    let average_confidence_pct = if records.is_empty() {
        0.0
    } else {
        let sum: f64 = records.iter().map(|record| record.confidence).sum();
        round_one_decimal(sum / records.len() as f64 * 100.0)
    };

    HistorySummary {
        total_records: records.len(),
        sorted,
        emotion_counts,
        most_frequent,
        average_confidence_pct,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
