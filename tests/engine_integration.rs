//! Integration tests for the full engine flow: classify a message, compose
//! recommendations, assemble the reply, persist the record, and aggregate
//! the history.

use mood_insight_engine::{
    aggregate, assemble_reply, classify, compose, EmotionLabel, EngineConfig, FoodPreference,
    HistoryStore, MemoryHistoryStore, MessageType, MoodCategory, MoodRecord, PreferenceSet,
    ProfileStore, RecommendationSnapshot, TimestampValue, TravelPreference, UserProfile,
};

/// Build the record a caller would persist after one interaction
fn record_interaction(message: &str, preferences: &PreferenceSet, millis: i64) -> MoodRecord {
    let result = classify(message);
    let bundle = compose(result.emotion, result.mood, preferences);

    MoodRecord {
        emotion: result.emotion,
        mood_category: result.mood,
        confidence: result.confidence,
        user_message: message.to_string(),
        message_type: MessageType::Text,
        timestamp: Some(TimestampValue::Millis(millis)),
        recommendations: RecommendationSnapshot {
            food: bundle.food.clone(),
            social_media: bundle.social_media.clone(),
            travel_places: bundle
                .travel
                .as_ref()
                .map(|t| t.places.clone())
                .unwrap_or_default(),
        },
    }
}

fn full_preferences() -> PreferenceSet {
    PreferenceSet {
        food: Some(FoodPreference::Veg),
        social_media: vec!["instagram".to_string(), "youtube".to_string()],
        travel: Some(TravelPreference::Park),
    }
}

#[test]
fn classify_compose_and_reply_for_a_happy_message() {
    let config = EngineConfig::default();
    let result = classify("I am so happy and excited today");

    assert_eq!(result.emotion, EmotionLabel::Happy);
    assert_eq!(result.mood, MoodCategory::Positive);
    assert!(result.confidence >= 0.7);

    let bundle = compose(result.emotion, result.mood, &full_preferences());
    assert!(!bundle.food.is_empty());
    assert_eq!(bundle.social_media.len(), 2);
    assert!(bundle.travel.is_some());

    let reply = assemble_reply(&result, &bundle, &config.response);
    assert!(reply.contains("HAPPY"));
    // reply shows the configured prefix of each list
    assert!(reply.contains(bundle.therapy[0].as_str()));
    assert!(reply.contains(bundle.activities[1].as_str()));
}

#[test]
fn persist_and_aggregate_a_conversation_history() {
    let preferences = full_preferences();
    let mut store = MemoryHistoryStore::new();

    let messages = [
        "I am so happy and excited today",
        "feeling anxious and worried about work",
        "what a wonderful amazing day",
        "I feel sad and lonely tonight",
        "pretty happy with how things went",
    ];
    for (i, message) in messages.iter().enumerate() {
        store.append("user_1", record_interaction(message, &preferences, (i as i64 + 1) * 60_000));
    }

    assert_eq!(store.count("user_1"), 5);

    let summary = aggregate(&store.records_for("user_1"));

    assert_eq!(summary.total_records, 5);
    assert_eq!(summary.most_frequent, Some(EmotionLabel::Happy));
    assert_eq!(summary.emotion_counts[&EmotionLabel::Happy], 3);

    // most recent message first
    assert_eq!(summary.sorted[0].user_message, messages[4]);
    assert_eq!(summary.sorted[4].user_message, messages[0]);

    // every persisted record carries its recommendation snapshot
    for record in &summary.sorted {
        assert!(!record.recommendations.food.is_empty());
        assert_eq!(record.recommendations.social_media.len(), 2);
        assert!(!record.recommendations.travel_places.is_empty());
    }

    // average of the five confidences, as a rounded percentage
    let expected: f64 = summary.sorted.iter().map(|r| r.confidence).sum::<f64>() / 5.0 * 100.0;
    let expected = (expected * 10.0).round() / 10.0;
    assert_eq!(summary.average_confidence_pct, expected);
}

#[test]
fn aggregation_handles_mixed_timestamp_encodings() {
    let records_json = r#"[
        {"emotion": "happy", "mood_category": "positive", "confidence": 0.7,
         "timestamp": "2024-03-02T10:00:00Z"},
        {"emotion": "sad", "mood_category": "negative", "confidence": 0.6,
         "timestamp": {"seconds": 1709200000, "nanos": 0}},
        {"emotion": "calm", "mood_category": "positive", "confidence": 0.8,
         "timestamp": 1709400000000},
        {"emotion": "confused", "mood_category": "neutral", "confidence": 0.5,
         "timestamp": "not a date at all"},
        {"emotion": "angry", "mood_category": "negative", "confidence": 0.6}
    ]"#;
    let records: Vec<MoodRecord> = serde_json::from_str(records_json).unwrap();

    let summary = aggregate(&records);

    // calm (2024-03-02T17:20Z) is the most recent, then happy, then sad;
    // the unparseable and missing timestamps sort last in input order
    let order: Vec<EmotionLabel> = summary.sorted.iter().map(|r| r.emotion).collect();
    assert_eq!(
        order,
        vec![
            EmotionLabel::Calm,
            EmotionLabel::Happy,
            EmotionLabel::Sad,
            EmotionLabel::Confused,
            EmotionLabel::Angry,
        ]
    );
}

#[test]
fn empty_history_aggregates_to_the_baseline_summary() {
    let store = MemoryHistoryStore::new();
    let summary = aggregate(&store.records_for("nobody"));

    assert_eq!(summary.total_records, 0);
    assert!(summary.emotion_counts.is_empty());
    assert_eq!(summary.most_frequent, None);
    assert_eq!(summary.average_confidence_pct, 0.0);
    assert!(summary.recent(10).is_empty());
}

#[test]
fn profile_store_supplies_preferences_for_composition() {
    let mut profiles = ProfileStore::new();
    profiles
        .create(UserProfile::new("user_1", "Asha").with_preferences(PreferenceSet {
            food: Some(FoodPreference::Chat),
            social_media: vec!["facebook".to_string()],
            travel: None,
        }))
        .expect("create profile");

    let result = classify("I'm frustrated and angry about this");
    assert_eq!(result.emotion, EmotionLabel::Angry);

    let profile = profiles.get("user_1").expect("profile");
    let bundle = compose(result.emotion, result.mood, &profile.preferences);

    assert_eq!(bundle.food[0], "Strong Coffee");
    assert_eq!(bundle.social_media.len(), 1);
    assert!(bundle.social_media[0].starts_with("facebook: "));
    assert!(bundle.travel.is_none());

    // composition never mutates the standing preferences
    assert_eq!(
        profiles.get("user_1").unwrap().preferences.food,
        Some(FoodPreference::Chat)
    );
}

#[test]
fn recent_view_respects_the_configured_limit() {
    let config = EngineConfig::default();
    let preferences = PreferenceSet::default();
    let mut store = MemoryHistoryStore::new();

    for i in 0..25 {
        store.append(
            "user_1",
            record_interaction("feeling calm and peaceful", &preferences, i * 1_000),
        );
    }

    let summary = aggregate(&store.records_for("user_1"));
    assert_eq!(summary.recent(config.history.recent_limit).len(), 10);
}
