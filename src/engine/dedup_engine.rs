use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::actors::{BufferCommand, PendingBufferActor};
use crate::collaborators::{Categorizer, Notifier};
use crate::engine::commit::Committer;
use crate::engine::config::EngineConfig;
use crate::engine::errors::EngineError;
use crate::engine::Observation;
use crate::models::{Categorization, ParsedTransaction};
use crate::storage::TransactionStore;

/// Collapses observations of the same real-world transaction into one committed record.
///
/// Cloning the handle is cheap; every clone talks to the same pending buffer.
#[derive(Clone)]
pub struct DedupEngine {
    sender: mpsc::UnboundedSender<BufferCommand>
}

impl DedupEngine {
    /// Must be called from within a tokio runtime.
    pub fn new(config: EngineConfig, categorizer: Arc<dyn Categorizer>, store: Arc<dyn TransactionStore>, notifier: Arc<dyn Notifier>) -> Self {
        let committer = Arc::new(Committer::new(categorizer, store, notifier));
        let sender = PendingBufferActor::spawn(Arc::new(config), committer);

        Self { sender }
    }

    /// Buffers or merges one parsed transaction. Returns once the buffer has been updated.
    pub async fn process(&self, transaction: ParsedTransaction) -> Result<Observation, EngineError> {
        self.observe(transaction, None).await
    }

    /// Same as [`DedupEngine::process`], carrying a category assigned ahead of time.
    pub async fn process_categorized(&self, transaction: ParsedTransaction, categorization: Categorization) -> Result<Observation, EngineError> {
        self.observe(transaction, Some(categorization)).await
    }

    /// Number of transactions still waiting for their merge window to elapse.
    pub async fn pending(&self) -> Result<usize, EngineError> {
        self.request(|reply| BufferCommand::Pending { reply }).await
    }

    /// Commits every pending entry now and waits for all commits to finish.
    ///
    /// Returns how many pending entries were flushed.
    pub async fn shutdown(self) -> Result<usize, EngineError> {
        self.request(|reply| BufferCommand::Drain { reply }).await
    }

    async fn observe(&self, transaction: ParsedTransaction, category: Option<Categorization>) -> Result<Observation, EngineError> {
        self.request(|reply| BufferCommand::Observe { transaction, category, reply }).await
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> BufferCommand) -> Result<T, EngineError> {
        let (reply, response) = oneshot::channel();

        self.sender.send(command(reply)).map_err(|_| EngineError::Stopped)?;

        response.await.map_err(|_| EngineError::NoReply)
    }
}
