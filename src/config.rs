use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Engine configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MOOD_INSIGHT_` prefix and double underscores for nested values:
/// - `MOOD_INSIGHT_RESPONSE__THERAPY_COUNT` -> response.therapy_count
/// - `MOOD_INSIGHT_HISTORY__RECENT_LIMIT` -> history.recent_limit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Response assembly configuration
    #[serde(default)]
    pub response: ResponseConfig,

    /// History view configuration
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseConfig {
    /// Number of therapy suggestions folded into an assembled reply
    #[serde(default = "default_therapy_count")]
    pub therapy_count: usize,

    /// Number of activity suggestions folded into an assembled reply
    #[serde(default = "default_activity_count")]
    pub activity_count: usize,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            therapy_count: default_therapy_count(),
            activity_count: default_activity_count(),
        }
    }
}

fn default_therapy_count() -> usize {
    2
}

fn default_activity_count() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Number of records shown in the recent-moods view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    10
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOOD_INSIGHT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
