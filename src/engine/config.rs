use std::time::Duration;

use rust_decimal::Decimal;

use crate::engine::merge::SourcePriority;

pub const DEFAULT_MERGE_WINDOW: Duration = Duration::from_secs(10);
pub const DEFAULT_AMOUNT_TOLERANCE: Decimal = Decimal::ONE;
pub const DEFAULT_MAX_GAP_MILLIS: i64 = 120_000;

/// Tuning for the dedupe engine. Fixed for the lifetime of an engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Delay before a buffered transaction is committed; restarted on every merge.
    pub merge_window: Duration,
    /// Largest absolute amount difference still treated as the same event.
    pub amount_tolerance: Decimal,
    /// Largest receipt-time difference still treated as the same event.
    pub max_gap_millis: i64,
    pub source_priority: SourcePriority
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            merge_window: DEFAULT_MERGE_WINDOW,
            amount_tolerance: DEFAULT_AMOUNT_TOLERANCE,
            max_gap_millis: DEFAULT_MAX_GAP_MILLIS,
            source_priority: SourcePriority::default()
        }
    }
}

impl EngineConfig {
    pub fn with_merge_window(mut self, merge_window: Duration) -> Self {
        self.merge_window = merge_window;
        self
    }

    pub fn with_amount_tolerance(mut self, amount_tolerance: Decimal) -> Self {
        self.amount_tolerance = amount_tolerance.abs();
        self
    }

    pub fn with_max_gap_millis(mut self, max_gap_millis: i64) -> Self {
        self.max_gap_millis = max_gap_millis.abs();
        self
    }

    pub fn with_source_priority(mut self, source_priority: SourcePriority) -> Self {
        self.source_priority = source_priority;
        self
    }
}
