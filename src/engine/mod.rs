mod commit;
mod config;
mod dedup_engine;
mod errors;
mod merge;
mod pipeline;
#[cfg(test)]
mod tests;

pub use commit::Committer;
pub use config::{EngineConfig, DEFAULT_AMOUNT_TOLERANCE, DEFAULT_MAX_GAP_MILLIS, DEFAULT_MERGE_WINDOW};
pub use dedup_engine::DedupEngine;
pub use merge::{PendingRecord, SourcePriority};
pub use pipeline::Pipeline;

/// What happened to one observation handed to the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Observation {
    /// Started a new pending entry.
    Buffered,
    /// Folded into an existing pending entry; its commit timer restarted.
    Merged,
    /// Took over an occupied key it did not match; the previous entry was committed immediately.
    Displaced
}
