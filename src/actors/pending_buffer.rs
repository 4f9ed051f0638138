use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tokio::spawn;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::sleep;
use tracing::{debug, info, trace, warn};

use crate::engine::{Committer, EngineConfig, Observation, PendingRecord};
use crate::models::{Categorization, ParsedTransaction};
use crate::types::{dedupe_key, DedupeKey};

pub enum BufferCommand {
    Observe {
        transaction: ParsedTransaction,
        category: Option<Categorization>,
        reply: oneshot::Sender<Observation>
    },
    Fire {
        key: DedupeKey,
        generation: u64
    },
    Pending {
        reply: oneshot::Sender<usize>
    },
    Drain {
        reply: oneshot::Sender<usize>
    }
}

struct PendingEntry {
    record: PendingRecord,
    generation: u64,
    timer: AbortHandle
}

/// Owns the pending buffer; the only place it is ever read or written.
///
/// Commands are handled one at a time, so the find-candidate, merge-or-insert
/// and reschedule sequence is atomic with respect to every producer and
/// every timer. Commits run on their own tasks, outside the actor.
pub struct PendingBufferActor;

impl PendingBufferActor {
    /// Spawns a new actor and returns its input channel.
    pub fn spawn(config: Arc<EngineConfig>, committer: Arc<Committer>) -> mpsc::UnboundedSender<BufferCommand> {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut buffer = PendingBuffer {
            entries: HashMap::new(),
            next_generation: 0,
            in_flight: Vec::new(),
            config,
            committer,
            sender: sender.downgrade()
        };

        spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    BufferCommand::Observe { transaction, category, reply } => {
                        let observation = buffer.observe(transaction, category);
                        let _ = reply.send(observation);
                    }
                    BufferCommand::Fire { key, generation } => {
                        buffer.fire(key, generation);
                    }
                    BufferCommand::Pending { reply } => {
                        let _ = reply.send(buffer.entries.len());
                    }
                    BufferCommand::Drain { reply } => {
                        let drained = buffer.drain().await;
                        let _ = reply.send(drained);
                    }
                }
            }

            //NOTE: Every handle is gone, commit whatever is still buffered rather than lose it
            let drained = buffer.drain().await;

            if drained > 0 {
                info!("Pending buffer committed {drained} entries on shutdown");
            }
        });

        sender
    }
}

struct PendingBuffer {
    entries: HashMap<DedupeKey, PendingEntry>,
    next_generation: u64,
    in_flight: Vec<JoinHandle<()>>,
    config: Arc<EngineConfig>,
    committer: Arc<Committer>,
    sender: mpsc::WeakUnboundedSender<BufferCommand>
}

impl PendingBuffer {
    fn observe(&mut self, transaction: ParsedTransaction, category: Option<Categorization>) -> Observation {
        let key = dedupe_key(transaction.amount);

        if let Some(matched) = self.find_candidate(&key, &transaction) {
            let generation = self.next_generation();
            let timer = self.schedule(matched.clone(), generation);

            if let Some(entry) = self.entries.get_mut(&matched) {
                entry.timer.abort();
                debug!("Merging [{}] from [{}] into pending [{matched}]", transaction.idempotency_hash, transaction.source_name);
                entry.record.merge(transaction, category, &self.config.source_priority);
                entry.generation = generation;
                entry.timer = timer;
            }

            return Observation::Merged;
        }

        let displaced = self.entries.remove(&key);
        let generation = self.next_generation();
        let timer = self.schedule(key.clone(), generation);

        trace!("Buffering [{}] from [{}] under [{key}]", transaction.idempotency_hash, transaction.source_name);

        self.entries.insert(key.clone(), PendingEntry {
            record: PendingRecord::new(transaction, category),
            generation,
            timer
        });

        match displaced {
            Some(previous) => {
                previous.timer.abort();
                debug!("Pending [{key}] displaced by a non-matching observation, committing it now");
                self.spawn_commit(previous.record);
                Observation::Displaced
            }
            None => Observation::Buffered
        }
    }

    /// Exact key first; otherwise the closest pending entry within tolerance.
    fn find_candidate(&self, key: &DedupeKey, transaction: &ParsedTransaction) -> Option<DedupeKey> {
        if self.entries.get(key).is_some_and(|entry| entry.record.matches(transaction, &self.config)) {
            return Some(key.clone());
        }

        self.entries.iter()
            .filter(|(_, entry)| entry.record.matches(transaction, &self.config))
            .min_by(|(left_key, left), (right_key, right)| {
                left.record.amount_distance(transaction).cmp(&right.record.amount_distance(transaction))
                    .then_with(|| left.record.time_distance(transaction).cmp(&right.record.time_distance(transaction)))
                    .then_with(|| left_key.cmp(right_key))
            })
            .map(|(key, _)| key.clone())
    }

    fn fire(&mut self, key: DedupeKey, generation: u64) {
        let current = self.entries.get(&key).map(|entry| entry.generation);

        if current != Some(generation) {
            trace!("Ignoring stale commit timer for [{key}] generation [{generation}]");
            return;
        }

        if let Some(entry) = self.entries.remove(&key) {
            debug!("Merge window elapsed for [{key}], committing");
            self.spawn_commit(entry.record);
        }
    }

    async fn drain(&mut self) -> usize {
        let mut drained: Vec<PendingEntry> = self.entries.drain()
            .map(|(_, entry)| entry)
            .collect();

        drained.sort_by_key(|entry| entry.record.origin.timestamp);

        let count = drained.len();

        for entry in drained {
            entry.timer.abort();
            self.spawn_commit(entry.record);
        }

        for result in join_all(self.in_flight.drain(..)).await {
            if let Err(error) = result {
                warn!("A commit task did not finish gracefully: {error:?}");
            }
        }

        count
    }

    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn schedule(&self, key: DedupeKey, generation: u64) -> AbortHandle {
        let window = self.config.merge_window;
        let sender = self.sender.upgrade();

        spawn(async move {
            sleep(window).await;

            if let Some(sender) = sender {
                let _ = sender.send(BufferCommand::Fire { key, generation });
            }
        }).abort_handle()
    }

    fn spawn_commit(&mut self, record: PendingRecord) {
        let committer = self.committer.clone();

        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(spawn(async move {
            committer.commit(record).await;
        }));
    }
}
