//! Recommendation composition.
//!
//! Derives a personalized suggestion bundle from a classified emotion, its
//! mood bucket, and the user's standing preferences. Pure lookup over the
//! static catalogs: identical inputs always produce an identical bundle,
//! and the preference set is never mutated.

pub mod catalog;
pub mod response;

pub use catalog::{activity_recommendations, therapy_suggestions};
pub use response::assemble_reply;

use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionLabel, MoodCategory};

/// Standing food preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    Veg,
    NonVeg,
    Chat,
}

/// Standing travel preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelPreference {
    Temple,
    Park,
}

/// Platforms with curated content tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Youtube,
}

impl SocialPlatform {
    /// Parse a caller-supplied platform identifier, case-insensitively.
    /// Unknown identifiers yield `None` and are skipped by the composer.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "instagram" => Some(SocialPlatform::Instagram),
            "facebook" => Some(SocialPlatform::Facebook),
            "youtube" => Some(SocialPlatform::Youtube),
            _ => None,
        }
    }
}

/// A user's standing category selections, supplied by the caller on each
/// composition call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    /// At most one food preference
    #[serde(default)]
    pub food: Option<FoodPreference>,

    /// Selected platform identifiers. Order is preserved, duplicates each
    /// produce their own entry, unknown identifiers are skipped.
    #[serde(default)]
    pub social_media: Vec<String>,

    /// At most one travel preference
    #[serde(default)]
    pub travel: Option<TravelPreference>,
}

/// Travel portion of a bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelBundle {
    pub places: Vec<String>,
    pub activities: Vec<String>,
}

/// The composed set of suggestions for one classification result.
/// Derived fresh on every call; never cached or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Therapy suggestions for the detected emotion
    pub therapy: Vec<String>,
    /// Activity suggestions for the mood bucket
    pub activities: Vec<String>,
    /// Food items; empty when no food preference is set
    pub food: Vec<String>,
    /// One `"<platform>: <suggestion>"` entry per selected platform
    pub social_media: Vec<String>,
    /// Absent (not empty) when no travel preference is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<TravelBundle>,
}

/// Compose a recommendation bundle for a classified emotion and the user's
/// standing preferences.
pub fn compose(
    emotion: EmotionLabel,
    mood: MoodCategory,
    preferences: &PreferenceSet,
) -> RecommendationBundle {
    let therapy = catalog::therapy_suggestions(emotion)
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    let activities = catalog::activity_recommendations(mood)
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    let food = match preferences.food {
        Some(preference) => catalog::food_recommendations(preference, emotion)
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        None => Vec::new(),
    };

    // The caller's identifier string is kept verbatim in the prefix
    let social_media = preferences
        .social_media
        .iter()
        .filter_map(|id| {
            SocialPlatform::from_identifier(id)
                .map(|platform| format!("{id}: {}", catalog::social_suggestion(platform, emotion)))
        })
        .collect();

    let travel = preferences.travel.map(|preference| {
        let (places, activities) = catalog::travel_recommendations(preference, emotion);
        TravelBundle {
            places: places.iter().map(|s| (*s).to_string()).collect(),
            activities: activities.iter().map(|s| (*s).to_string()).collect(),
        }
    });

    RecommendationBundle {
        therapy,
        activities,
        food,
        social_media,
        travel,
    }
}
