use std::sync::Arc;

use dashmap::iter::Iter;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::TransactionRecord;
use crate::storage::{StoreError, TransactionStore, UpsertOutcome};

pub struct MemoryTransactionStore {
    records: Arc<DashMap<String, TransactionRecord>>
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new())
        }
    }

    pub fn iter(&self) -> Iter<'_, String, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every stored record, oldest first.
    pub fn records(&self) -> Vec<TransactionRecord> {
        let mut records: Vec<TransactionRecord> = self.iter()
            .map(|item| item.value().clone())
            .collect();

        records.sort_by(|left, right| {
            left.timestamp.cmp(&right.timestamp)
                .then_with(|| left.idempotency_hash.cmp(&right.idempotency_hash))
        });

        records
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn upsert(&self, record: TransactionRecord) -> Result<UpsertOutcome, StoreError> {
        if record.idempotency_hash.is_empty() {
            return Err(StoreError::rejected("", "idempotency hash is empty"));
        }

        match self.records.entry(record.idempotency_hash.clone()) {
            Entry::Occupied(mut existing) => {
                if *existing.get() == record {
                    Ok(UpsertOutcome::Unchanged)
                } else {
                    existing.insert(record);
                    Ok(UpsertOutcome::Updated)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    fn load(&self, idempotency_hash: &str) -> Option<TransactionRecord> {
        self.records.get(idempotency_hash).map(|record| record.value().clone())
    }
}
