use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategorizeError {
    #[error("Categorize error: merchant text is empty")]
    EmptyMerchant
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notify error: delivery of [{idempotency_hash}] failed: {reason}")]
    Delivery {
        idempotency_hash: String,
        reason: String
    }
}
