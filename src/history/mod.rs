//! Mood history records and aggregation.
//!
//! A `MoodRecord` captures one past interaction: the classification, the
//! message context, and a snapshot of the recommendations that were shown.
//! Records are created by the caller, persisted externally, and immutable
//! thereafter; this module only reads them.

pub mod compute;
pub mod timestamp;

pub use compute::{aggregate, HistorySummary};
pub use timestamp::TimestampValue;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionLabel, MoodCategory};

/// How the message reached the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Voice,
}

/// Snapshot of the recommendations persisted with a record. Travel collapses
/// to its places list in storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub social_media: Vec<String>,
    #[serde(default)]
    pub travel_places: Vec<String>,
}

/// One persisted past interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// Detected emotion
    pub emotion: EmotionLabel,
    /// Mood bucket of the detected emotion
    pub mood_category: MoodCategory,
    /// Classifier confidence; records missing it read as 0.0 and weigh the
    /// average down
    #[serde(default)]
    pub confidence: f64,
    /// The user's message as classified
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub message_type: MessageType,
    /// Timestamp in whichever encoding the writing client used
    #[serde(default)]
    pub timestamp: Option<TimestampValue>,
    #[serde(default)]
    pub recommendations: RecommendationSnapshot,
}

impl MoodRecord {
    /// Normalized timestamp; missing values degrade to the epoch origin,
    /// which sorts last under descending recency
    pub fn normalized_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
            .as_ref()
            .map(TimestampValue::normalize)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_timestamp_normalizes_to_epoch_origin() {
        let record = MoodRecord {
            emotion: EmotionLabel::Neutral,
            mood_category: MoodCategory::Neutral,
            confidence: 0.5,
            user_message: String::new(),
            message_type: MessageType::Text,
            timestamp: None,
            recommendations: RecommendationSnapshot::default(),
        };
        assert_eq!(record.normalized_timestamp(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_record_deserializes_with_sparse_fields() {
        let json = r#"{
            "emotion": "sad",
            "mood_category": "negative"
        }"#;
        let record: MoodRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.emotion, EmotionLabel::Sad);
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.message_type, MessageType::Text);
        assert!(record.timestamp.is_none());
        assert!(record.recommendations.food.is_empty());
    }

    #[test]
    fn test_record_deserializes_heterogeneous_timestamps() {
        let millis: MoodRecord = serde_json::from_str(
            r#"{"emotion": "happy", "mood_category": "positive", "timestamp": 1709285400000}"#,
        )
        .unwrap();
        assert_eq!(
            millis.normalized_timestamp(),
            Utc.timestamp_millis_opt(1709285400000).unwrap()
        );

        let seconds: MoodRecord = serde_json::from_str(
            r#"{"emotion": "happy", "mood_category": "positive", "timestamp": {"seconds": 1709285400}}"#,
        )
        .unwrap();
        assert_eq!(
            seconds.normalized_timestamp(),
            Utc.timestamp_opt(1709285400, 0).unwrap()
        );
    }

    #[test]
    fn test_message_type_wire_names() {
        let voice: MessageType = serde_json::from_str("\"voice\"").unwrap();
        assert_eq!(voice, MessageType::Voice);
    }
}
