//! Rule-based emotion classification.
//!
//! Maps free-form user text to a coarse emotional state by counting keyword
//! hits against a fixed set of lexicons. Deterministic and total: any string
//! input yields a result, and degenerate input yields the neutral baseline.

pub mod lexicon;

pub use lexicon::{lexicon_for, EmotionLexicon, EMOTION_LEXICONS};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fine-grained detected affect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Anxious,
    Angry,
    Calm,
    Confused,
    Neutral,
}

impl EmotionLabel {
    /// All labels, lexicon scan order first, neutral last
    pub fn all() -> &'static [EmotionLabel] {
        &[
            EmotionLabel::Happy,
            EmotionLabel::Sad,
            EmotionLabel::Anxious,
            EmotionLabel::Angry,
            EmotionLabel::Calm,
            EmotionLabel::Confused,
            EmotionLabel::Neutral,
        ]
    }

    /// Coarse valence bucket for this emotion. Total and fixed: every label
    /// maps to exactly one category.
    pub fn mood_category(self) -> MoodCategory {
        match self {
            EmotionLabel::Happy | EmotionLabel::Calm => MoodCategory::Positive,
            EmotionLabel::Sad | EmotionLabel::Anxious | EmotionLabel::Angry => {
                MoodCategory::Negative
            }
            EmotionLabel::Confused | EmotionLabel::Neutral => MoodCategory::Neutral,
        }
    }

    /// Emoji shown next to the label in chat and mood cards
    pub fn emoji(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "😊",
            EmotionLabel::Sad => "😢",
            EmotionLabel::Anxious => "😰",
            EmotionLabel::Angry => "😠",
            EmotionLabel::Calm => "😌",
            EmotionLabel::Confused => "🤔",
            EmotionLabel::Neutral => "😐",
        }
    }

    /// Hex color used for the label in charts and badges
    pub fn color_hex(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "#10B981",
            EmotionLabel::Sad => "#EF4444",
            EmotionLabel::Anxious => "#F59E0B",
            EmotionLabel::Angry => "#DC2626",
            EmotionLabel::Calm => "#3B82F6",
            EmotionLabel::Confused => "#8B5CF6",
            EmotionLabel::Neutral => "#9CA3AF",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmotionLabel::Happy => write!(f, "happy"),
            EmotionLabel::Sad => write!(f, "sad"),
            EmotionLabel::Anxious => write!(f, "anxious"),
            EmotionLabel::Angry => write!(f, "angry"),
            EmotionLabel::Calm => write!(f, "calm"),
            EmotionLabel::Confused => write!(f, "confused"),
            EmotionLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Coarse valence bucket derived from an emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodCategory::Positive => write!(f, "positive"),
            MoodCategory::Negative => write!(f, "negative"),
            MoodCategory::Neutral => write!(f, "neutral"),
        }
    }
}

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Coarse valence bucket of the winning emotion
    pub mood: MoodCategory,
    /// Winning emotion, neutral when nothing matched
    pub emotion: EmotionLabel,
    /// Raw keyword hit count for the winning emotion
    pub score: u32,
    /// Heuristic certainty in [0.5, 1.0]; not a calibrated probability
    pub confidence: f64,
}

/// Confidence when nothing matches
const CONFIDENCE_FLOOR: f64 = 0.5;
/// Confidence gained per keyword hit, capped at 1.0 overall
const CONFIDENCE_STEP: f64 = 0.1;

/// Classify a free-form message into an emotional state.
///
/// Empty or all-whitespace input returns the neutral baseline without
/// scanning. Otherwise each lexicon is scored by how many of its keywords
/// occur in the lowercased text (one hit per keyword, however often it
/// repeats), and the lexicon with the strictly greatest count wins; ties
/// keep the earlier lexicon in scan order. Never panics, including on
/// non-alphabetic or multi-byte input.
pub fn classify(text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return ClassificationResult {
            mood: MoodCategory::Neutral,
            emotion: EmotionLabel::Neutral,
            score: 0,
            confidence: CONFIDENCE_FLOOR,
        };
    }

    let lower = text.to_lowercase();
    let mut best = EmotionLabel::Neutral;
    let mut best_count = 0u32;

    for lex in EMOTION_LEXICONS {
        let count = lex
            .keywords
            .iter()
            .filter(|keyword| lower.contains(**keyword))
            .count() as u32;
        if count > best_count {
            best_count = count;
            best = lex.emotion;
        }
    }

    let confidence = (CONFIDENCE_FLOOR + CONFIDENCE_STEP * f64::from(best_count)).min(1.0);
    let mood = best.mood_category();

    debug!(emotion = %best, %mood, score = best_count, confidence, "classified message");

    ClassificationResult {
        mood,
        emotion: best,
        score: best_count,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_neutral_baseline() {
        let result = classify("");
        assert_eq!(result.emotion, EmotionLabel::Neutral);
        assert_eq!(result.mood, MoodCategory::Neutral);
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_whitespace_input_is_neutral_baseline() {
        let result = classify("   \t\n  ");
        assert_eq!(result.emotion, EmotionLabel::Neutral);
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_happy_message() {
        let result = classify("I am so happy and excited today");
        assert_eq!(result.emotion, EmotionLabel::Happy);
        assert_eq!(result.mood, MoodCategory::Positive);
        assert!(result.score >= 2);
        assert!(result.confidence >= 0.7);
    }

    #[test]
    fn test_anxious_message() {
        let result = classify("I feel anxious and scared about tomorrow");
        assert_eq!(result.emotion, EmotionLabel::Anxious);
        assert_eq!(result.mood, MoodCategory::Negative);
    }

    #[test]
    fn test_no_keyword_yields_neutral() {
        let result = classify("the weather report mentioned rain");
        assert_eq!(result.emotion, EmotionLabel::Neutral);
        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_tie_keeps_earlier_lexicon() {
        // one sad keyword ("miss") and one anxious keyword ("scared"):
        // sad is earlier in scan order and keeps the win
        let result = classify("I miss her and I'm scared");
        assert_eq!(result.emotion, EmotionLabel::Sad);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = classify("happy happy happy");
        assert_eq!(result.emotion, EmotionLabel::Happy);
        assert_eq!(result.score, 1);
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_substring_matching_is_accepted() {
        // "unhappy" contains both "happy" and the sad keyword "unhappy";
        // the tie resolves to the earlier happy lexicon
        let result = classify("unhappy");
        assert_eq!(result.emotion, EmotionLabel::Happy);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let result = classify("FEELING GRATEFUL AND BLESSED");
        assert_eq!(result.emotion, EmotionLabel::Happy);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let result = classify("今日はとても嬉しい 🌸");
        assert_eq!(result.emotion, EmotionLabel::Neutral);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_confidence_bounds_and_monotonicity() {
        let inputs = [
            "nothing to see",
            "happy",
            "happy and excited",
            "happy excited wonderful amazing love fantastic",
            "happy excited wonderful amazing love fantastic brilliant awesome excellent good perfect",
        ];
        let mut last = 0.0f64;
        for input in inputs {
            let result = classify(input);
            assert!(result.confidence >= 0.5 && result.confidence <= 1.0);
            assert!(result.confidence >= last);
            last = result.confidence;
        }
    }

    #[test]
    fn test_confidence_caps_at_one() {
        // more than five hits saturates the confidence formula
        let result =
            classify("happy excited wonderful amazing love fantastic brilliant awesome");
        assert!(result.score > 5);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_mood_mapping_is_total_and_stable() {
        for &emotion in EmotionLabel::all() {
            let first = emotion.mood_category();
            let second = emotion.mood_category();
            assert_eq!(first, second);
        }
        assert_eq!(EmotionLabel::Happy.mood_category(), MoodCategory::Positive);
        assert_eq!(EmotionLabel::Calm.mood_category(), MoodCategory::Positive);
        assert_eq!(EmotionLabel::Sad.mood_category(), MoodCategory::Negative);
        assert_eq!(EmotionLabel::Anxious.mood_category(), MoodCategory::Negative);
        assert_eq!(EmotionLabel::Angry.mood_category(), MoodCategory::Negative);
        assert_eq!(EmotionLabel::Confused.mood_category(), MoodCategory::Neutral);
        assert_eq!(EmotionLabel::Neutral.mood_category(), MoodCategory::Neutral);
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&EmotionLabel::Anxious).unwrap();
        assert_eq!(json, "\"anxious\"");

        let decoded: EmotionLabel = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(decoded, EmotionLabel::Calm);

        let mood: MoodCategory = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(mood, MoodCategory::Negative);
    }

    #[test]
    fn test_display_metadata_covers_every_label() {
        for &emotion in EmotionLabel::all() {
            assert!(!emotion.emoji().is_empty());
            assert!(emotion.color_hex().starts_with('#'));
            assert_eq!(emotion.color_hex().len(), 7);
        }
    }
}
