mod amount;

pub use amount::{dedupe_key, parse_amount};

/// Receipt time of a source message, in milliseconds since the Unix epoch.
pub type TimestampMillis = i64;

/// Coarse grouping key used to find merge candidates (see [`dedupe_key`]).
pub type DedupeKey = String;

/// Base regional currency every handler defaults to.
pub const BASE_CURRENCY: &str = "INR";
