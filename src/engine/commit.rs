use std::sync::Arc;

use tokio::spawn;
use tracing::{debug, error, warn};

use crate::collaborators::{Categorizer, Notifier};
use crate::engine::merge::PendingRecord;
use crate::models::{Categorization, TransactionRecord};
use crate::storage::TransactionStore;

/// Finalizes pending records: categorize, persist, then notify.
pub struct Committer {
    categorizer: Arc<dyn Categorizer>,
    store: Arc<dyn TransactionStore>,
    notifier: Arc<dyn Notifier>
}

impl Committer {
    pub fn new(categorizer: Arc<dyn Categorizer>, store: Arc<dyn TransactionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { categorizer, store, notifier }
    }

    /// Returns the persisted record, or `None` when persistence failed.
    ///
    /// A failed upsert is logged and the record is dropped without retry.
    pub async fn commit(&self, pending: PendingRecord) -> Option<TransactionRecord> {
        let merchant_text = pending.counterparty.clone()
            .unwrap_or_else(|| pending.origin.source_name.clone());

        let resolved = match self.categorizer.categorize(&merchant_text, Some(pending.origin.amount)).await {
            Ok(categorization) => Some(categorization),
            Err(error) => {
                warn!("Categorization failed for [{merchant_text}], keeping pending category: {error}");
                None
            }
        };

        let categorization = Categorization::pick(pending.category.clone(), resolved)
            .unwrap_or_else(Categorization::uncategorized);

        let record = pending.into_record(categorization);

        match self.store.upsert(record.clone()) {
            Ok(outcome) => {
                debug!("Committed [{}] from [{}]: {outcome:?}", record.idempotency_hash, record.source);
            }
            Err(error) => {
                error!("Dropping [{}] from [{}] after persistence failure: {error}", record.idempotency_hash, record.source);
                return None;
            }
        }

        let notifier = self.notifier.clone();
        let notification = record.clone();

        spawn(async move {
            if let Err(error) = notifier.notify(&notification).await {
                warn!("Notifier failed, record is still persisted: {error}");
            }
        });

        Some(record)
    }
}
