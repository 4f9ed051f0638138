use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::collaborators::NotifyError;
use crate::models::TransactionRecord;

/// Downstream alerting. Called fire-and-forget after a record is persisted.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, record: &TransactionRecord) -> Result<(), NotifyError>;
}

/// Hands every committed record to a downstream consumer over a channel.
///
/// Delivery fails once the consumer has hung up; the record itself is
/// already persisted by then.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<TransactionRecord>
}

impl ChannelNotifier {
    /// The notifier together with the receiving end for the consumer.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TransactionRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, record: &TransactionRecord) -> Result<(), NotifyError> {
        self.sender.send(record.clone()).map_err(|_| NotifyError::Delivery {
            idempotency_hash: record.idempotency_hash.clone(),
            reason: "downstream consumer has hung up".to_string()
        })
    }
}
