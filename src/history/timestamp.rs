//! Timestamp normalization for persisted mood records.
//!
//! Historical records carry timestamps in several encodings, depending on
//! which client wrote them. All format sniffing lives here; the aggregator
//! only ever sees `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A record timestamp in one of its historical encodings.
///
/// Deserialization is untagged; the first matching form wins, so the
/// variant order here is load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    /// Canonical point in time (RFC 3339 on the wire)
    DateTime(DateTime<Utc>),
    /// Store-native `{seconds, nanos}` object
    Seconds {
        seconds: i64,
        #[serde(default, alias = "nanoseconds")]
        nanos: u32,
    },
    /// Raw epoch milliseconds
    Millis(i64),
    /// Free-form date text, parsed on normalization
    Text(String),
}

impl TimestampValue {
    /// Convert to the canonical point-in-time type.
    ///
    /// Total: unparseable text and out-of-range numeric values degrade to
    /// the epoch origin, the sentinel that sorts last under descending
    /// recency.
    pub fn normalize(&self) -> DateTime<Utc> {
        match self {
            TimestampValue::DateTime(dt) => *dt,
            TimestampValue::Seconds { seconds, nanos } => Utc
                .timestamp_opt(*seconds, *nanos)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
            TimestampValue::Millis(millis) => Utc
                .timestamp_millis_opt(*millis)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
            TimestampValue::Text(text) => parse_text(text),
        }
    }
}

/// Parse free-form date text; anything unrecognized becomes the epoch origin
fn parse_text(text: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Utc.from_utc_datetime(&naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Utc.from_utc_datetime(&naive);
        }
    }
    DateTime::UNIX_EPOCH
}
