//! Mood Insight Engine
//!
//! A deterministic, rule-based mood-inference and recommendation engine.
//! Free-form user text is classified into an emotional state, a bundle of
//! personalized suggestions is derived from that state plus the user's
//! standing preferences, and past classification records aggregate into
//! summary statistics and a time-ordered view.
//!
//! The engine performs no I/O: every operation is a pure mapping from inputs
//! to a freshly constructed output, safe to call concurrently without
//! synchronization. Persistence, transport, and rendering belong to the
//! embedding application.

pub mod config;
pub mod emotion;
pub mod error;
pub mod history;
pub mod recommend;
pub mod storage;

pub use config::{EngineConfig, HistoryConfig, ResponseConfig};
pub use error::{EngineError, Result};

pub use emotion::{classify, ClassificationResult, EmotionLabel, MoodCategory};
pub use history::{
    aggregate, HistorySummary, MessageType, MoodRecord, RecommendationSnapshot, TimestampValue,
};
pub use recommend::{
    activity_recommendations, assemble_reply, compose, therapy_suggestions, FoodPreference,
    PreferenceSet, RecommendationBundle, TravelBundle, TravelPreference,
};
pub use storage::{HistoryStore, MemoryHistoryStore, ProfileStore, StoreError, UserProfile};
