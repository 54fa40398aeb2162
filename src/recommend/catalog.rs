//! Static suggestion catalogs.
//!
//! Every catalog is a fixed, order-significant table keyed by the closed
//! emotion/mood enums. Callers may truncate a list to a prefix; the engine
//! never reorders, samples, or rebuilds them per call. Each keyed lookup has
//! a statically defined fallback so the catalogs stay total even if a key is
//! ever absent.

use crate::emotion::{EmotionLabel, MoodCategory};

use super::{FoodPreference, SocialPlatform, TravelPreference};

// ============================================================================
// Therapy suggestions (keyed by emotion)
// ============================================================================

/// Therapy suggestions for one emotion
#[derive(Debug, Clone)]
pub struct TherapyEntry {
    pub emotion: EmotionLabel,
    /// Order-significant; callers show a prefix
    pub suggestions: &'static [&'static str],
}

pub const THERAPY_HAPPY: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Happy,
    suggestions: &[
        "🎉 You're in a great mood! Keep this positive energy going.",
        "💝 Consider sharing your joy with someone close to you.",
        "📝 Journal about what made you happy today.",
        "🎵 Listen to your favorite uplifting music.",
    ],
};

pub const THERAPY_SAD: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Sad,
    suggestions: &[
        "💙 It's okay to feel sad. Remember, this feeling is temporary.",
        "🤝 Reach out to a friend or family member for support.",
        "🚶 Take a walk in nature to lift your spirits.",
        "📞 Consider talking to a professional counselor.",
        "💪 Remember your strengths and past achievements.",
    ],
};

pub const THERAPY_ANXIOUS: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Anxious,
    suggestions: &[
        "🧘 Try deep breathing exercises: 4-7-8 breathing technique.",
        "🚶 Go for a walk to help calm your nervous system.",
        "📝 Write down your worries to get them out of your head.",
        "🎵 Listen to calming music or meditation sounds.",
        "⏰ Break tasks into smaller, manageable steps.",
    ],
};

pub const THERAPY_ANGRY: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Angry,
    suggestions: &[
        "😤 Your anger is valid, but let's work through it together.",
        "💨 Take a break from the situation if possible.",
        "🏃 Do some physical exercise to release tension.",
        "🎨 Channel your energy into a creative activity.",
        "⏸️ Practice the \"pause and reflect\" technique before reacting.",
    ],
};

pub const THERAPY_CALM: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Calm,
    suggestions: &[
        "😌 You're in a peaceful state. Maintain this balance.",
        "🧘 Great time for meditation or mindfulness practice.",
        "📚 Read something inspiring or uplifting.",
        "🎯 Use this clarity to work on important goals.",
    ],
};

pub const THERAPY_CONFUSED: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Confused,
    suggestions: &[
        "🤔 Take time to clarify your thoughts.",
        "📋 Write down what's confusing you for clarity.",
        "🗣️ Talk it through with someone you trust.",
        "⏸️ Take a step back before making decisions.",
    ],
};

/// Default entry, also the fallback for any unmatched key
pub const THERAPY_NEUTRAL: TherapyEntry = TherapyEntry {
    emotion: EmotionLabel::Neutral,
    suggestions: &[
        "😊 You're in a balanced state.",
        "🎯 A good time to plan and organize.",
        "📖 Consider trying something new today.",
    ],
};

/// All therapy entries
pub const THERAPY_ENTRIES: &[TherapyEntry] = &[
    THERAPY_HAPPY,
    THERAPY_SAD,
    THERAPY_ANXIOUS,
    THERAPY_ANGRY,
    THERAPY_CALM,
    THERAPY_CONFUSED,
    THERAPY_NEUTRAL,
];

/// Therapy suggestions for an emotion; unmatched keys fall back to neutral
pub fn therapy_suggestions(emotion: EmotionLabel) -> &'static [&'static str] {
    THERAPY_ENTRIES
        .iter()
        .find(|entry| entry.emotion == emotion)
        .map(|entry| entry.suggestions)
        .unwrap_or(THERAPY_NEUTRAL.suggestions)
}

// ============================================================================
// Activity recommendations (keyed by mood)
// ============================================================================

/// Activity recommendations for one mood bucket
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub mood: MoodCategory,
    pub activities: &'static [&'static str],
}

pub const ACTIVITIES_POSITIVE: ActivityEntry = ActivityEntry {
    mood: MoodCategory::Positive,
    activities: &[
        "🎬 Watch your favorite movie or series",
        "🎮 Play games with friends",
        "🎸 Create music or play an instrument",
        "📸 Take photos and create memories",
        "🌍 Plan a trip or adventure",
        "🍕 Cook a favorite meal",
        "🏃 Go for a fun run or exercise",
        "🎨 Engage in creative hobbies",
    ],
};

pub const ACTIVITIES_NEGATIVE: ActivityEntry = ActivityEntry {
    mood: MoodCategory::Negative,
    activities: &[
        "🧘 Practice yoga or meditation",
        "📚 Read a comforting book",
        "🛁 Take a relaxing bath",
        "🎵 Listen to soothing music",
        "🌳 Spend time in nature",
        "👥 Call a friend or family member",
        "✏️ Journal your feelings",
        "☕ Make tea and relax",
    ],
};

/// Default entry, also the fallback for any unmatched key
pub const ACTIVITIES_NEUTRAL: ActivityEntry = ActivityEntry {
    mood: MoodCategory::Neutral,
    activities: &[
        "📚 Learn something new",
        "🎯 Work on personal goals",
        "🧩 Solve puzzles or brain teasers",
        "📖 Read articles or blogs",
        "🎓 Take an online course",
        "🎪 Explore new hobbies",
    ],
};

/// All activity entries
pub const ACTIVITY_ENTRIES: &[ActivityEntry] = &[
    ACTIVITIES_POSITIVE,
    ACTIVITIES_NEGATIVE,
    ACTIVITIES_NEUTRAL,
];

/// Activity recommendations for a mood; unmatched keys fall back to neutral
pub fn activity_recommendations(mood: MoodCategory) -> &'static [&'static str] {
    ACTIVITY_ENTRIES
        .iter()
        .find(|entry| entry.mood == mood)
        .map(|entry| entry.activities)
        .unwrap_or(ACTIVITIES_NEUTRAL.activities)
}

// ============================================================================
// Food catalogs (keyed by food preference x emotion)
// ============================================================================

/// Food items for one emotion within a catalog
#[derive(Debug, Clone)]
pub struct FoodRow {
    pub emotion: EmotionLabel,
    pub items: &'static [&'static str],
}

/// All food rows for one standing preference
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    pub preference: FoodPreference,
    pub rows: &'static [FoodRow],
}

pub const VEG_CATALOG: FoodCatalog = FoodCatalog {
    preference: FoodPreference::Veg,
    rows: &[
        FoodRow {
            emotion: EmotionLabel::Happy,
            items: &[
                "Veggie Pizza",
                "Fruit Smoothie",
                "Salad with Nuts",
                "Vegetable Stir Fry",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Sad,
            items: &[
                "Comfort Veggie Pasta",
                "Warm Vegetable Soup",
                "Sweet Dessert",
                "Herbal Tea",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Anxious,
            items: &[
                "Calming Chamomile Tea",
                "Light Salad",
                "Yogurt Parfait",
                "Green Smoothie",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Angry,
            items: &[
                "Spicy Vegetable Curry",
                "Grilled Vegetables",
                "Lentil Soup",
                "Whole Grain Bread",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Calm,
            items: &[
                "Fresh Fruit",
                "Nuts & Seeds",
                "Herbal Tea",
                "Meditation Snack Mix",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Confused,
            items: &[
                "Brain Boosting Berries",
                "Dark Chocolate",
                "Almonds",
                "Green Tea",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Neutral,
            items: &[
                "Mixed Vegetables",
                "Grain Bowl",
                "Light Snack",
                "Water & Fruits",
            ],
        },
    ],
};

pub const NONVEG_CATALOG: FoodCatalog = FoodCatalog {
    preference: FoodPreference::NonVeg,
    rows: &[
        FoodRow {
            emotion: EmotionLabel::Happy,
            items: &["Grilled Chicken", "Fish & Chips", "BBQ Meat", "Seafood Pasta"],
        },
        FoodRow {
            emotion: EmotionLabel::Sad,
            items: &[
                "Warm Meat Soup",
                "Comfort Meat Stew",
                "Roasted Chicken",
                "Meat Curry",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Anxious,
            items: &[
                "Grilled Fish",
                "Light Meat Salad",
                "Boiled Chicken",
                "Seafood Broth",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Angry,
            items: &["Spicy Meat Curry", "Grilled Steak", "Barbecue", "Meat Skewers"],
        },
        FoodRow {
            emotion: EmotionLabel::Calm,
            items: &[
                "Poached Fish",
                "Tender Chicken",
                "Light Meat Dish",
                "Seafood Risotto",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Confused,
            items: &[
                "Protein-rich Steak",
                "Salmon with Brain Nutrients",
                "Egg Curry",
                "Chicken Brain Boost",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Neutral,
            items: &["Grilled Meat", "Simple Fish", "Meat & Veggie", "Balanced Plate"],
        },
    ],
};

pub const CHAT_CATALOG: FoodCatalog = FoodCatalog {
    preference: FoodPreference::Chat,
    rows: &[
        FoodRow {
            emotion: EmotionLabel::Happy,
            items: &[
                "Chai with Friends",
                "Coffee Date",
                "Tea & Snacks",
                "Chat Over Drinks",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Sad,
            items: &[
                "Comfort Tea",
                "Soothing Chat",
                "Warm Beverage",
                "Listening Session",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Anxious,
            items: &[
                "Calming Tea Ritual",
                "Peaceful Chat",
                "Meditation Tea",
                "Quiet Coffee",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Angry,
            items: &[
                "Strong Coffee",
                "Energizing Chat",
                "Discussion Break",
                "Tension Release Talk",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Calm,
            items: &[
                "Relaxing Tea",
                "Peaceful Chat",
                "Herbal Ritual",
                "Mindful Beverage",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Confused,
            items: &[
                "Clarity Chat",
                "Thoughtful Tea",
                "Discussion & Ideas",
                "Brainstorm Session",
            ],
        },
        FoodRow {
            emotion: EmotionLabel::Neutral,
            items: &[
                "Regular Chat",
                "Coffee Break",
                "Tea Time",
                "Casual Conversation",
            ],
        },
    ],
};

/// All food catalogs
pub const FOOD_CATALOGS: &[FoodCatalog] = &[VEG_CATALOG, NONVEG_CATALOG, CHAT_CATALOG];

/// Fallback list when an emotion row is missing from a catalog; never empty
pub const FOOD_FALLBACK: &[&str] = &["Try something new based on your mood!"];

fn food_catalog(preference: FoodPreference) -> &'static FoodCatalog {
    match preference {
        FoodPreference::Veg => &VEG_CATALOG,
        FoodPreference::NonVeg => &NONVEG_CATALOG,
        FoodPreference::Chat => &CHAT_CATALOG,
    }
}

/// Food items for a (preference, emotion) pair; missing rows fall back to a
/// non-empty default list
pub fn food_recommendations(
    preference: FoodPreference,
    emotion: EmotionLabel,
) -> &'static [&'static str] {
    food_catalog(preference)
        .rows
        .iter()
        .find(|row| row.emotion == emotion)
        .map(|row| row.items)
        .unwrap_or(FOOD_FALLBACK)
}

// ============================================================================
// Social media catalogs (keyed by platform x emotion)
// ============================================================================

/// Suggestions for one emotion on one platform
#[derive(Debug, Clone)]
pub struct PlatformRow {
    pub emotion: EmotionLabel,
    pub suggestions: &'static [&'static str],
}

/// All rows for one platform
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    pub platform: SocialPlatform,
    pub rows: &'static [PlatformRow],
}

pub const INSTAGRAM_CATALOG: PlatformCatalog = PlatformCatalog {
    platform: SocialPlatform::Instagram,
    rows: &[
        PlatformRow {
            emotion: EmotionLabel::Happy,
            suggestions: &[
                "Follow inspiring accounts",
                "Share your happy moments",
                "Explore travel stories",
                "Follow art & design pages",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Sad,
            suggestions: &[
                "Join supportive communities",
                "Follow motivational accounts",
                "Watch uplifting reels",
                "Join wellness groups",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Anxious,
            suggestions: &[
                "Follow meditation accounts",
                "Join wellness communities",
                "Watch calming content",
                "Follow mental health advocates",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Angry,
            suggestions: &[
                "Follow funny content",
                "Join hobby communities",
                "Watch comedy reels",
                "Follow positive creators",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Calm,
            suggestions: &[
                "Follow minimalist accounts",
                "Join zen communities",
                "Watch peaceful content",
                "Follow nature photographers",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Confused,
            suggestions: &[
                "Follow educational accounts",
                "Join learning communities",
                "Watch how-to content",
                "Follow experts in your field",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Neutral,
            suggestions: &[
                "Explore discover page",
                "Follow friends & family",
                "Join interest groups",
                "Watch trending content",
            ],
        },
    ],
};

pub const FACEBOOK_CATALOG: PlatformCatalog = PlatformCatalog {
    platform: SocialPlatform::Facebook,
    rows: &[
        PlatformRow {
            emotion: EmotionLabel::Happy,
            suggestions: &[
                "Join celebration groups",
                "Share life updates",
                "Join hobby groups",
                "Connect with community",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Sad,
            suggestions: &[
                "Join support groups",
                "Connect with friends",
                "Join interest communities",
                "Watch uplifting stories",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Anxious,
            suggestions: &[
                "Join wellness groups",
                "Follow mental health pages",
                "Join calming communities",
                "Connect with support networks",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Angry,
            suggestions: &[
                "Join hobby groups",
                "Share achievements",
                "Join positive communities",
                "Connect with like-minded people",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Calm,
            suggestions: &[
                "Join meditation groups",
                "Follow wellness pages",
                "Join peaceful communities",
                "Connect authentically",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Confused,
            suggestions: &[
                "Join discussion groups",
                "Follow educational pages",
                "Join learning communities",
                "Ask questions",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Neutral,
            suggestions: &[
                "Browse news feed",
                "Connect with friends",
                "Join groups",
                "Explore events",
            ],
        },
    ],
};

pub const YOUTUBE_CATALOG: PlatformCatalog = PlatformCatalog {
    platform: SocialPlatform::Youtube,
    rows: &[
        PlatformRow {
            emotion: EmotionLabel::Happy,
            suggestions: &[
                "Watch music videos",
                "Comedy channels",
                "Celebration compilations",
                "Feel-good documentaries",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Sad,
            suggestions: &[
                "Motivational speeches",
                "Inspiring stories",
                "Uplifting music",
                "Heartwarming content",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Anxious,
            suggestions: &[
                "Meditation sessions",
                "Calming music",
                "Yoga tutorials",
                "Breathing exercises",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Angry,
            suggestions: &[
                "Comedy specials",
                "Workout videos",
                "Creative tutorials",
                "Positive content",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Calm,
            suggestions: &[
                "Peaceful nature videos",
                "Meditation guides",
                "Lo-fi music",
                "Relaxation content",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Confused,
            suggestions: &[
                "Educational videos",
                "How-to guides",
                "Expert talks",
                "Learning tutorials",
            ],
        },
        PlatformRow {
            emotion: EmotionLabel::Neutral,
            suggestions: &[
                "General entertainment",
                "News channels",
                "Hobby content",
                "Mixed channels",
            ],
        },
    ],
};

/// All platform catalogs
pub const PLATFORM_CATALOGS: &[PlatformCatalog] =
    &[INSTAGRAM_CATALOG, FACEBOOK_CATALOG, YOUTUBE_CATALOG];

/// Fallback suggestion if a platform table is ever missing both the emotion
/// and the neutral row
pub const SOCIAL_FALLBACK: &str = "Explore content that suits your mood";

fn platform_catalog(platform: SocialPlatform) -> &'static PlatformCatalog {
    match platform {
        SocialPlatform::Instagram => &INSTAGRAM_CATALOG,
        SocialPlatform::Facebook => &FACEBOOK_CATALOG,
        SocialPlatform::Youtube => &YOUTUBE_CATALOG,
    }
}

/// The single suggestion emitted for a platform: first entry of the emotion
/// row, neutral row when the emotion is absent
pub fn social_suggestion(platform: SocialPlatform, emotion: EmotionLabel) -> &'static str {
    let rows = platform_catalog(platform).rows;
    rows.iter()
        .find(|row| row.emotion == emotion)
        .or_else(|| rows.iter().find(|row| row.emotion == EmotionLabel::Neutral))
        .and_then(|row| row.suggestions.first().copied())
        .unwrap_or(SOCIAL_FALLBACK)
}

// ============================================================================
// Travel catalogs (keyed by travel preference x emotion)
// ============================================================================

/// Places and activities for one emotion within a travel catalog
#[derive(Debug, Clone)]
pub struct TravelRow {
    pub emotion: EmotionLabel,
    pub places: &'static [&'static str],
    pub activities: &'static [&'static str],
}

/// All travel rows for one standing preference
#[derive(Debug, Clone)]
pub struct TravelCatalog {
    pub preference: TravelPreference,
    pub rows: &'static [TravelRow],
}

pub const TEMPLE_CATALOG: TravelCatalog = TravelCatalog {
    preference: TravelPreference::Temple,
    rows: &[
        TravelRow {
            emotion: EmotionLabel::Happy,
            places: &[
                "Golden Temple (spiritual)",
                "Varanasi Temples (scenic)",
                "Meenakshi Temple (grand)",
            ],
            activities: &[
                "Meditation",
                "Spiritual exploration",
                "Photography",
                "Community gathering",
            ],
        },
        TravelRow {
            emotion: EmotionLabel::Sad,
            places: &[
                "Peaceful Temple Gardens",
                "Sacred Pilgrimage Sites",
                "Spiritual Retreat Temples",
            ],
            activities: &["Meditation", "Prayer", "Reflection", "Spiritual healing"],
        },
        TravelRow {
            emotion: EmotionLabel::Anxious,
            places: &[
                "Quiet Temple Premises",
                "Serene Ashrams",
                "Meditation Centers",
            ],
            activities: &["Meditation", "Yoga", "Chanting", "Spiritual guidance"],
        },
        TravelRow {
            emotion: EmotionLabel::Angry,
            places: &[
                "Grand Temples",
                "Pilgrimage Routes",
                "Spiritual Retreat Centers",
            ],
            activities: &[
                "Pilgrimage",
                "Volunteering",
                "Community service",
                "Spiritual journey",
            ],
        },
        TravelRow {
            emotion: EmotionLabel::Calm,
            places: &["Peaceful Temples", "Meditation Centers", "Sacred Gardens"],
            activities: &["Meditation", "Spiritual study", "Reflection", "Peace"],
        },
        TravelRow {
            emotion: EmotionLabel::Confused,
            places: &["Teaching Temples", "Spiritual Centers", "Wisdom Retreats"],
            activities: &[
                "Learning",
                "Spiritual guidance",
                "Reflection",
                "Wisdom seeking",
            ],
        },
        TravelRow {
            emotion: EmotionLabel::Neutral,
            places: &["Popular Temples", "Religious Sites", "Cultural Heritage"],
            activities: &[
                "Sightseeing",
                "Cultural experience",
                "Photography",
                "Learning",
            ],
        },
    ],
};

pub const PARK_CATALOG: TravelCatalog = TravelCatalog {
    preference: TravelPreference::Park,
    rows: &[
        TravelRow {
            emotion: EmotionLabel::Happy,
            places: &[
                "Adventure Parks",
                "Amusement Parks",
                "Active Recreation Areas",
            ],
            activities: &["Sports", "Picnic", "Games", "Outdoor fun"],
        },
        TravelRow {
            emotion: EmotionLabel::Sad,
            places: &["Nature Parks", "Botanical Gardens", "Lakeside Parks"],
            activities: &["Walking", "Reflection", "Nature time", "Peaceful space"],
        },
        TravelRow {
            emotion: EmotionLabel::Anxious,
            places: &["Quiet Nature Parks", "Gardens", "Peaceful Trails"],
            activities: &[
                "Slow walk",
                "Breathing exercises",
                "Meditation",
                "Nature therapy",
            ],
        },
        TravelRow {
            emotion: EmotionLabel::Angry,
            places: &["Adventure Parks", "Sports Grounds", "Active Recreation"],
            activities: &["Sports", "Running", "Hiking", "Physical activity"],
        },
        TravelRow {
            emotion: EmotionLabel::Calm,
            places: &["Botanical Gardens", "Scenic Parks", "Lakeside Areas"],
            activities: &["Walking", "Meditation", "Reading", "Relaxation"],
        },
        TravelRow {
            emotion: EmotionLabel::Confused,
            places: &["Open Parks", "Nature Spaces", "Scenic Routes"],
            activities: &["Walking", "Thinking", "Reflection", "Clarity walking"],
        },
        TravelRow {
            emotion: EmotionLabel::Neutral,
            places: &["Community Parks", "Public Gardens", "Recreation Areas"],
            activities: &["Walking", "Relaxation", "Social time", "Leisure"],
        },
    ],
};

/// All travel catalogs
pub const TRAVEL_CATALOGS: &[TravelCatalog] = &[TEMPLE_CATALOG, PARK_CATALOG];

/// Generic placeholder when no travel catalog matches at all
pub const TRAVEL_FALLBACK_PLACES: &[&str] = &["Check local tourism sites"];
pub const TRAVEL_FALLBACK_ACTIVITIES: &[&str] = &["Explore nearby areas"];

fn travel_catalog(preference: TravelPreference) -> &'static TravelCatalog {
    match preference {
        TravelPreference::Temple => &TEMPLE_CATALOG,
        TravelPreference::Park => &PARK_CATALOG,
    }
}

/// Places and activities for a (preference, emotion) pair. Falls back to the
/// preference's neutral row, then to the generic placeholder.
pub fn travel_recommendations(
    preference: TravelPreference,
    emotion: EmotionLabel,
) -> (&'static [&'static str], &'static [&'static str]) {
    let rows = travel_catalog(preference).rows;
    rows.iter()
        .find(|row| row.emotion == emotion)
        .or_else(|| rows.iter().find(|row| row.emotion == EmotionLabel::Neutral))
        .map(|row| (row.places, row.activities))
        .unwrap_or((TRAVEL_FALLBACK_PLACES, TRAVEL_FALLBACK_ACTIVITIES))
}
