use rust_decimal::Decimal;

use crate::engine::config::EngineConfig;
use crate::models::{Categorization, ParsedTransaction, TransactionRecord};

/// Ranking of handler labels by how readable their counterparty labels tend to be.
///
/// Earlier entries win. Labels not in the ranking rank below every ranked label.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePriority {
    ranking: Vec<String>
}

impl Default for SourcePriority {
    fn default() -> Self {
        Self::new(["Google Pay", "PhonePe", "Paytm", "Amazon Pay", "CRED"])
    }
}

impl SourcePriority {
    pub fn new<I, S>(ranking: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        Self {
            ranking: ranking.into_iter().map(|label| label.as_ref().to_lowercase()).collect()
        }
    }

    fn rank(&self, source: &str) -> usize {
        let source = source.to_lowercase();

        self.ranking.iter()
            .position(|label| *label == source)
            .unwrap_or(self.ranking.len())
    }

    /// Whether `incoming`'s counterparty label should replace `existing`'s.
    ///
    /// A present label always beats a missing one. Between two present labels
    /// the strictly better ranked source wins; ties keep the existing label.
    pub fn prefers(&self, existing_source: &str, existing: Option<&str>, incoming_source: &str, incoming: Option<&str>) -> bool {
        match (existing, incoming) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(_), Some(_)) => self.rank(incoming_source) < self.rank(existing_source)
        }
    }
}

/// The engine's mutable, best-merged view of one real-world transaction.
///
/// `origin` is the first observation and keeps its identity (hash, amount,
/// timestamp, direction); the remaining fields evolve as duplicates merge in.
#[derive(Debug, Clone)]
pub struct PendingRecord {
    pub origin: ParsedTransaction,
    pub counterparty: Option<String>,
    pub counterparty_source: String,
    pub reference: Option<String>,
    pub account_suffix: Option<String>,
    pub balance_after: Option<Decimal>,
    pub is_card: bool,
    pub category: Option<Categorization>,
    pub notes: Vec<String>
}

impl PendingRecord {
    pub fn new(transaction: ParsedTransaction, category: Option<Categorization>) -> Self {
        Self {
            counterparty: transaction.counterparty.clone(),
            counterparty_source: transaction.source_name.clone(),
            reference: transaction.reference.clone(),
            account_suffix: transaction.account_suffix.clone(),
            balance_after: transaction.balance_after,
            is_card: transaction.is_card,
            category,
            notes: Vec::new(),
            origin: transaction
        }
    }

    pub fn amount_distance(&self, candidate: &ParsedTransaction) -> Decimal {
        (self.origin.amount - candidate.amount).abs()
    }

    pub fn time_distance(&self, candidate: &ParsedTransaction) -> i64 {
        self.origin.timestamp.abs_diff(candidate.timestamp).min(i64::MAX as u64) as i64
    }

    /// Amount and receipt time both within tolerance of the first observation.
    pub fn matches(&self, candidate: &ParsedTransaction, config: &EngineConfig) -> bool {
        self.amount_distance(candidate) <= config.amount_tolerance
            && self.time_distance(candidate) <= config.max_gap_millis
    }

    pub fn merge(&mut self, incoming: ParsedTransaction, category: Option<Categorization>, priority: &SourcePriority) {
        if priority.prefers(&self.counterparty_source, self.counterparty.as_deref(), &incoming.source_name, incoming.counterparty.as_deref()) {
            self.counterparty = incoming.counterparty.clone();
            self.counterparty_source = incoming.source_name.clone();
        }

        self.category = Categorization::pick(self.category.take(), category);

        if self.reference.is_none() {
            self.reference = incoming.reference.clone();
        }

        if self.account_suffix.is_none() {
            self.account_suffix = incoming.account_suffix.clone();
        }

        if self.balance_after.is_none() {
            self.balance_after = incoming.balance_after;
        }

        self.is_card |= incoming.is_card;

        self.notes.push(format!(
            "Merged duplicate from {} (amount {}, observed at {}, hash {})",
            incoming.source_name,
            incoming.amount,
            incoming.timestamp,
            short_hash(&incoming.idempotency_hash)
        ));
    }

    /// Final record with the resolved category applied.
    pub fn into_record(self, categorization: Categorization) -> TransactionRecord {
        let merged = ParsedTransaction {
            counterparty: self.counterparty,
            reference: self.reference,
            account_suffix: self.account_suffix,
            balance_after: self.balance_after,
            is_card: self.is_card,
            ..self.origin
        };

        let mut record = TransactionRecord::from_parsed(&merged, categorization);
        record.notes = self.notes;
        record
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
