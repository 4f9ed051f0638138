use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::engine::dedup_engine::DedupEngine;
use crate::engine::Observation;
use crate::models::{Categorization, CategorySource, InboundMessage};
use crate::registry::HandlerRegistry;

/// A category supplied alongside the message outranks anything a categorizer guesses.
const PRODUCER_CONFIDENCE: f64 = 1.0;

/// Counters for one pass over a message file.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PipelineSummary {
    pub read: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub merged: usize,
    pub displaced: usize
}

/// Feeds raw messages from a CSV file through the registry and into the dedupe engine.
pub struct Pipeline {
    registry: Arc<HandlerRegistry>,
    engine: DedupEngine,
    backpressure: usize
}

impl Pipeline {
    pub fn new(registry: Arc<HandlerRegistry>, engine: DedupEngine) -> Self {
        Self {
            registry,
            engine,
            backpressure: 256
        }
    }

    /// Reads, parses and observes every message in the file, in file order.
    ///
    /// Observed transactions are left in the pending buffer; call
    /// [`Pipeline::finish`] to commit whatever is still waiting.
    pub async fn run(&self, path: &str) -> anyhow::Result<PipelineSummary> {
        let (sender, receiver) = mpsc::channel::<InboundMessage>(self.backpressure);
        let reader_handle = self.spawn_message_reader(path.to_string(), sender);
        let processing_result = self.process_messages(receiver).await;

        match reader_handle.await {
            Ok(malformed) if malformed > 0 => warn!("Skipped {malformed} malformed rows in [{path}]"),
            Ok(_) => {}
            Err(error) => error!("Message reader for [{path}] stopped unexpectedly: {error}")
        }

        processing_result
    }

    /// Flushes the pending buffer. Returns how many entries were still pending.
    pub async fn finish(self) -> anyhow::Result<usize> {
        let pending = self.engine.pending().await?;
        debug!("Input exhausted with {pending} transactions still inside their merge window");

        Ok(self.engine.shutdown().await?)
    }

    /// Streams message rows into the channel; returns how many rows could not be read.
    fn spawn_message_reader(&self, path: String, sender: mpsc::Sender<InboundMessage>) -> JoinHandle<usize> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Unable to open message file [{path}]: {error}");
                    return 0;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut malformed = 0;

            for result in reader.deserialize::<InboundMessage>() {
                match result {
                    Ok(message) => {
                        if sender.blocking_send(message).is_err() {
                            debug!("Message consumer hung up, stopped reading [{path}]");
                            break;
                        }
                    }
                    Err(error) => {
                        malformed += 1;
                        let line = error.position().map(|position| position.line()).unwrap_or_default();
                        debug!("Unreadable message row at line {line} of [{path}]: {error}");
                    }
                }
            }

            malformed
        })
    }

    async fn process_messages(&self, mut receiver: mpsc::Receiver<InboundMessage>) -> anyhow::Result<PipelineSummary> {
        let mut summary = PipelineSummary::default();

        while let Some(message) = receiver.recv().await {
            summary.read += 1;

            let Some(transaction) = self.registry.parse(&message.raw_text, &message.sender_id, message.observed_at) else {
                summary.skipped += 1;
                continue;
            };

            summary.parsed += 1;

            let observation = match message.category {
                Some(category) => {
                    let categorization = Categorization::new(category, PRODUCER_CONFIDENCE, CategorySource::Producer);
                    self.engine.process_categorized(transaction, categorization).await?
                }
                None => self.engine.process(transaction).await?
            };

            match observation {
                Observation::Buffered => {}
                Observation::Merged => summary.merged += 1,
                Observation::Displaced => summary.displaced += 1
            }
        }

        debug!("Pipeline summary: {summary:?}");
        info!("Read {} messages, parsed {}, skipped {}, merged {}", summary.read, summary.parsed, summary.skipped, summary.merged);

        Ok(summary)
    }
}
