//! Reply assembly.
//!
//! Folds a classification result and its recommendation bundle into the
//! displayable chat reply. The bundle itself is left untouched; only the
//! reply truncates the suggestion lists to a configured prefix.

use crate::config::ResponseConfig;
use crate::emotion::ClassificationResult;

use super::RecommendationBundle;

/// Assemble the chat reply for one classified message.
pub fn assemble_reply(
    result: &ClassificationResult,
    bundle: &RecommendationBundle,
    config: &ResponseConfig,
) -> String {
    let emotion = result.emotion.to_string().to_uppercase();

    let therapy = bundle
        .therapy
        .iter()
        .take(config.therapy_count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let activities = bundle
        .activities
        .iter()
        .take(config.activity_count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🌟 I sense you're feeling {emotion}.\n\n\
         💡 Here's what I'd suggest:\n{therapy}\n\n\
         🎯 Activities for you:\n{activities}"
    )
}
