use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use crate::types::DedupeKey;

/// Parses a currency magnitude as it appears in bank messages.
///
/// Accepts Indian and western digit grouping (`1,23,456.78`, `123,456.78`).
/// Anything that is not a strictly positive number degrades to `None`.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value.trim()
        .trim_end_matches('.')
        .chars()
        .filter(|character| *character != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    match Decimal::from_str(&cleaned) {
        Ok(amount) if amount > Decimal::ZERO => Some(amount.normalize()),
        Ok(_) => None,
        Err(error) => {
            trace!("Discarding malformed amount '{value}': {error}");
            None
        }
    }
}

/// Absolute amount rounded to one decimal place, rendered with exactly one decimal.
pub fn dedupe_key(amount: Decimal) -> DedupeKey {
    let mut rounded = amount.abs().round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}
