use serde::Deserialize;

use crate::types::TimestampMillis;

/// One inbound message event, as read from the input CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "sender")]
    pub sender_id: String,
    #[serde(rename = "timestamp")]
    pub observed_at: TimestampMillis,
    #[serde(rename = "body")]
    pub raw_text: String,
    /// Category already known to the producer (an import job, say). Optional column.
    #[serde(default)]
    pub category: Option<String>
}
