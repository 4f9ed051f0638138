mod errors;
mod memory_store;

use crate::models::TransactionRecord;

pub use errors::StoreError;
pub use memory_store::MemoryTransactionStore;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged
}

/// Persistence sink for committed records, keyed by idempotency hash.
///
/// `upsert` must be idempotent: writing the same record twice leaves exactly
/// one stored record.
pub trait TransactionStore: Send + Sync + 'static {
    fn upsert(&self, record: TransactionRecord) -> Result<UpsertOutcome, StoreError>;
    fn load(&self, idempotency_hash: &str) -> Option<TransactionRecord>;
}
