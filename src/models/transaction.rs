use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Direction;
use crate::types::TimestampMillis;

/// The structured result of one successful parse of an inbound message.
///
/// A value is produced at most once per message and is never mutated
/// afterwards; the dedupe engine keeps its merged view separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTransaction {
    /// Positive magnitude; the sign is applied only when a record is stored.
    pub amount: Decimal,
    pub direction: Direction,
    /// Best-effort merchant or counterparty label.
    pub counterparty: Option<String>,
    /// Issuer reference, at least six characters when present.
    pub reference: Option<String>,
    /// Last three or four digits of the account, card or wallet used.
    pub account_suffix: Option<String>,
    pub balance_after: Option<Decimal>,
    pub timestamp: TimestampMillis,
    /// Label of the handler that produced this transaction.
    pub source_name: String,
    pub currency: String,
    /// Deterministic fingerprint of (sender, amount, raw text).
    pub idempotency_hash: String,
    pub is_card: bool
}
