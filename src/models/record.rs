use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Categorization, CategorySource, Direction, ParsedTransaction};
use crate::types::TimestampMillis;

/// The authoritative, persisted form of a committed transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Upsert key; the first-seen observation's hash survives a merge.
    pub idempotency_hash: String,
    /// Signed according to [`Direction::signed`].
    pub amount: Decimal,
    pub currency: String,
    pub direction: Direction,
    pub merchant: Option<String>,
    pub merchant_name: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub confidence: f64,
    pub category_source: CategorySource,
    pub timestamp: TimestampMillis,
    pub source: String,
    pub reference: Option<String>,
    pub account_suffix: Option<String>,
    pub balance_after: Option<Decimal>,
    pub is_card: bool,
    pub notes: Vec<String>,
    pub synced: bool
}

impl TransactionRecord {
    pub fn from_parsed(transaction: &ParsedTransaction, categorization: Categorization) -> Self {
        let merchant_name = categorization.merchant_name
            .or_else(|| transaction.counterparty.clone());

        Self {
            idempotency_hash: transaction.idempotency_hash.clone(),
            amount: transaction.direction.signed(transaction.amount),
            currency: transaction.currency.clone(),
            direction: transaction.direction,
            merchant: transaction.counterparty.clone(),
            merchant_name,
            category: categorization.category,
            subcategory: categorization.subcategory,
            confidence: categorization.confidence,
            category_source: categorization.source,
            timestamp: transaction.timestamp,
            source: transaction.source_name.clone(),
            reference: transaction.reference.clone(),
            account_suffix: transaction.account_suffix.clone(),
            balance_after: transaction.balance_after,
            is_card: transaction.is_card,
            notes: Vec::new(),
            synced: false
        }
    }
}
