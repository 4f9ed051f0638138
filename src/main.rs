mod actors;
mod collaborators;
mod engine;
mod models;
mod parsing;
mod registry;
mod storage;
mod types;

use std::collections::BTreeMap;
use std::io::{stderr, stdout};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::spawn;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::collaborators::{CachedCategorizer, ChannelNotifier, KeywordCategorizer};
use crate::engine::{
    DedupEngine, EngineConfig, Pipeline, SourcePriority, DEFAULT_AMOUNT_TOLERANCE, DEFAULT_MAX_GAP_MILLIS,
    DEFAULT_MERGE_WINDOW
};
use crate::models::{Direction, TransactionRecord};
use crate::registry::HandlerRegistry;
use crate::storage::MemoryTransactionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sms-ledger [messages].csv [log_level:optional] [merge_window_ms:optional] [amount_tolerance:optional] [max_gap_ms:optional] [source_priority:optional] > [records].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Source priority is a comma-separated list of handler labels, most readable first");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);
    let merge_window = args.get(3)
        .map(|s| parse_merge_window(s)).unwrap_or(DEFAULT_MERGE_WINDOW);
    let amount_tolerance = args.get(4)
        .map(|s| parse_amount_tolerance(s)).unwrap_or(DEFAULT_AMOUNT_TOLERANCE);
    let max_gap_millis = args.get(5)
        .map(|s| parse_max_gap(s)).unwrap_or(DEFAULT_MAX_GAP_MILLIS);
    let source_priority = args.get(6)
        .map(|s| parse_source_priority(s)).unwrap_or_default();

    setup_logging(log_level);

    let registry = Arc::new(HandlerRegistry::new()?);
    let labels: Vec<&str> = registry.handlers().iter().map(|handler| handler.label()).collect();
    info!("Loaded {} format handlers", labels.len());
    debug!("Handler order: {labels:?}");

    let store = Arc::new(MemoryTransactionStore::new());
    let categorizer = Arc::new(CachedCategorizer::new(KeywordCategorizer::new()));
    let (notifier, committed) = ChannelNotifier::channel();
    let tally = spawn(tally_committed(committed));

    let config = EngineConfig::default()
        .with_merge_window(merge_window)
        .with_amount_tolerance(amount_tolerance)
        .with_max_gap_millis(max_gap_millis)
        .with_source_priority(source_priority);

    let engine = DedupEngine::new(config, categorizer, store.clone(), Arc::new(notifier));
    let pipeline = Pipeline::new(registry, engine);

    let timer = Instant::now();
    let summary = pipeline.run(path).await?;
    let flushed = pipeline.finish().await?;
    let duration = timer.elapsed();

    info!("Processed {} messages in: {duration:?} ({flushed} flushed on shutdown, {} displaced)", summary.read, summary.displaced);

    for (category, count) in tally.await? {
        info!("{category}: {count} transactions");
    }

    if store.is_empty() {
        warn!("No transactions were committed from [{path}]");
    } else {
        info!("{} transactions committed", store.len());
    }

    write_results_to_stdout(&store)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn parse_merge_window(value: &str) -> Duration {
    match value.parse::<u64>() {
        Ok(millis) => Duration::from_millis(millis),
        Err(_) => {
            eprintln!("Invalid merge window '{}', defaulting to {:?}", value, DEFAULT_MERGE_WINDOW);
            DEFAULT_MERGE_WINDOW
        }
    }
}

fn parse_amount_tolerance(value: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(tolerance) => tolerance,
        Err(_) => {
            eprintln!("Invalid amount tolerance '{}', defaulting to {}", value, DEFAULT_AMOUNT_TOLERANCE);
            DEFAULT_AMOUNT_TOLERANCE
        }
    }
}

fn parse_max_gap(value: &str) -> i64 {
    match value.parse::<i64>() {
        Ok(millis) => millis,
        Err(_) => {
            eprintln!("Invalid max gap '{}', defaulting to {}ms", value, DEFAULT_MAX_GAP_MILLIS);
            DEFAULT_MAX_GAP_MILLIS
        }
    }
}

fn parse_source_priority(value: &str) -> SourcePriority {
    SourcePriority::new(value.split(',').map(str::trim).filter(|label| !label.is_empty()))
}

/// Consumes committed-record notifications until every notifier is gone.
async fn tally_committed(mut committed: mpsc::UnboundedReceiver<TransactionRecord>) -> BTreeMap<String, usize> {
    let mut categories = BTreeMap::new();

    while let Some(record) = committed.recv().await {
        info!(
            hash = %record.idempotency_hash,
            amount = %record.amount,
            source = %record.source,
            category = %record.category,
            "Transaction committed"
        );

        *categories.entry(record.category).or_insert(0) += 1;
    }

    categories
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Records go to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

const OUTPUT_HEADERS: [&str; 15] = [
    "hash", "timestamp", "source", "direction", "amount", "currency", "counterparty", "category",
    "subcategory", "confidence", "reference", "account", "balance", "card", "notes"
];

#[derive(Serialize)]
struct OutputRow<'a> {
    hash: &'a str,
    timestamp: i64,
    source: &'a str,
    direction: Direction,
    amount: String,
    currency: &'a str,
    counterparty: Option<&'a str>,
    category: &'a str,
    subcategory: Option<&'a str>,
    confidence: f64,
    reference: Option<&'a str>,
    account: Option<&'a str>,
    balance: Option<String>,
    card: bool,
    notes: String
}

impl<'a> From<&'a TransactionRecord> for OutputRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        Self {
            hash: &record.idempotency_hash,
            timestamp: record.timestamp,
            source: &record.source,
            direction: record.direction,
            amount: format!("{:.2}", record.amount),
            currency: &record.currency,
            counterparty: record.merchant_name.as_deref(),
            category: &record.category,
            subcategory: record.subcategory.as_deref(),
            confidence: record.confidence,
            reference: record.reference.as_deref(),
            account: record.account_suffix.as_deref(),
            balance: record.balance_after.map(|balance| format!("{balance:.2}")),
            card: record.is_card,
            notes: record.notes.join("; ")
        }
    }
}

fn write_results_to_stdout(store: &MemoryTransactionStore) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout().lock());

    writer.write_record(OUTPUT_HEADERS)?;

    for record in store.records() {
        writer.serialize(OutputRow::from(&record))?;
    }

    writer.flush()?;

    Ok(())
}
