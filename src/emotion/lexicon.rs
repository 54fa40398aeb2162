//! Emotion keyword lexicons for rule-based classification.
//!
//! Matching is case-insensitive substring containment, so a keyword can hit
//! inside a larger unrelated word. That is an accepted trade-off of the
//! lexical approach, not a defect; the lists are tuned for short
//! conversational check-ins.

use super::EmotionLabel;

/// One emotion and the keywords that signal it
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    /// Emotion this lexicon scores
    pub emotion: EmotionLabel,
    /// Keywords matched as lowercase substrings, each counting at most once
    pub keywords: &'static [&'static str],
}

pub const HAPPY_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Happy,
    keywords: &[
        "happy",
        "joyful",
        "excited",
        "great",
        "wonderful",
        "amazing",
        "love",
        "fantastic",
        "brilliant",
        "awesome",
        "excellent",
        "good",
        "perfect",
        "blessed",
        "grateful",
    ],
};

pub const SAD_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Sad,
    keywords: &[
        "sad",
        "depressed",
        "down",
        "unhappy",
        "miserable",
        "heartbroken",
        "devastated",
        "terrible",
        "awful",
        "horrible",
        "miss",
        "lonely",
        "alone",
        "lost",
    ],
};

pub const ANXIOUS_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Anxious,
    keywords: &[
        "anxious",
        "nervous",
        "worried",
        "stressed",
        "tense",
        "panic",
        "afraid",
        "scared",
        "fear",
        "restless",
        "uneasy",
        "overwhelmed",
    ],
};

pub const ANGRY_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Angry,
    keywords: &[
        "angry",
        "furious",
        "mad",
        "rage",
        "irritated",
        "frustrated",
        "annoyed",
        "upset",
        "bitter",
        "resentful",
    ],
};

pub const CALM_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Calm,
    keywords: &[
        "calm",
        "peaceful",
        "relaxed",
        "serene",
        "tranquil",
        "zen",
        "content",
        "at peace",
        "comfortable",
    ],
};

pub const CONFUSED_LEXICON: EmotionLexicon = EmotionLexicon {
    emotion: EmotionLabel::Confused,
    keywords: &[
        "confused",
        "uncertain",
        "lost",
        "disoriented",
        "puzzled",
        "bewildered",
        "unsure",
    ],
};

/// All lexicons in scan order. The order is load-bearing: on tied scores the
/// earlier lexicon keeps the win. Neutral has no lexicon; it is only ever
/// the default when nothing matches.
pub const EMOTION_LEXICONS: &[EmotionLexicon] = &[
    HAPPY_LEXICON,
    SAD_LEXICON,
    ANXIOUS_LEXICON,
    ANGRY_LEXICON,
    CALM_LEXICON,
    CONFUSED_LEXICON,
];

/// Find the lexicon for an emotion, if it has one
pub fn lexicon_for(emotion: EmotionLabel) -> Option<&'static EmotionLexicon> {
    EMOTION_LEXICONS.iter().find(|l| l.emotion == emotion)
}
