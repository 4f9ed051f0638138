use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store error: record [{idempotency_hash}] was rejected: {reason}")]
    Rejected {
        idempotency_hash: String,
        reason: String
    }
}

impl StoreError {
    pub fn rejected(idempotency_hash: &str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            idempotency_hash: idempotency_hash.to_string(),
            reason: reason.into()
        }
    }
}
