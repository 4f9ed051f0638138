use super::pipeline::PipelineSummary;
use super::{DedupEngine, EngineConfig, Observation, PendingRecord, Pipeline, SourcePriority, DEFAULT_MERGE_WINDOW};

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::future::join_all;
use rand::Rng;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;
use tokio::time::sleep;

use crate::collaborators::{CategorizeError, Categorizer, ChannelNotifier, KeywordCategorizer, NotifyError, Notifier};
use crate::models::{Categorization, CategorySource, Direction, ParsedTransaction, TransactionRecord};
use crate::parsing::heuristics::idempotency_hash;
use crate::registry::HandlerRegistry;
use crate::storage::{MemoryTransactionStore, StoreError, TransactionStore, UpsertOutcome};

struct DiscardingNotifier;

#[async_trait]
impl Notifier for DiscardingNotifier {
    async fn notify(&self, _record: &TransactionRecord) -> Result<(), NotifyError> {
        Ok(())
    }
}

struct FailingStore;

impl TransactionStore for FailingStore {
    fn upsert(&self, record: TransactionRecord) -> Result<UpsertOutcome, StoreError> {
        Err(StoreError::rejected(&record.idempotency_hash, "disk full"))
    }

    fn load(&self, _idempotency_hash: &str) -> Option<TransactionRecord> {
        None
    }
}

struct FailingCategorizer;

#[async_trait]
impl Categorizer for FailingCategorizer {
    async fn categorize(&self, _merchant_text: &str, _amount: Option<Decimal>) -> Result<Categorization, CategorizeError> {
        Err(CategorizeError::EmptyMerchant)
    }
}

fn create_transaction(source: &str, amount: &str, timestamp: i64, counterparty: Option<&str>) -> Result<ParsedTransaction> {
    let amount = Decimal::from_str(amount)?;

    Ok(ParsedTransaction {
        amount,
        direction: Direction::Debit,
        counterparty: counterparty.map(str::to_string),
        reference: None,
        account_suffix: None,
        balance_after: None,
        timestamp,
        source_name: source.to_string(),
        currency: "INR".to_string(),
        idempotency_hash: idempotency_hash(source, amount, &format!("{source} paid {amount} at {timestamp}")),
        is_card: false
    })
}

fn create_engine(store: Arc<MemoryTransactionStore>) -> DedupEngine {
    DedupEngine::new(EngineConfig::default(), Arc::new(KeywordCategorizer::new()), store, Arc::new(DiscardingNotifier))
}

async fn wait_for_records(store: &MemoryTransactionStore, expected: usize) -> Result<()> {
    for _ in 0..100 {
        if store.len() >= expected {
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }

    Err(anyhow!("expected {expected} records, found {}", store.len()))
}

fn create_temporary_csv(rows: &[(&str, i64, &str)]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "sender,timestamp,body")?;

    for (sender, timestamp, body) in rows {
        writeln!(file, "{},{},\"{}\"", sender, timestamp, body.replace('"', "\"\""))?;
    }

    Ok(file)
}

#[test]
fn test_source_priority_prefers_ranked_sources_and_present_labels() {
    let priority = SourcePriority::default();

    assert!(priority.prefers("State Bank of India", Some("MADURI A"), "Google Pay", Some("Maduri Amulya")));
    assert!(!priority.prefers("Google Pay", Some("Maduri Amulya"), "State Bank of India", Some("MADURI A")));
    assert!(!priority.prefers("HDFC Bank", Some("Swiggy"), "Axis Bank", Some("SWIGGY LTD")));
    assert!(priority.prefers("HDFC Bank", None, "Axis Bank", Some("Swiggy")));
    assert!(!priority.prefers("HDFC Bank", Some("Swiggy"), "Google Pay", None));

    let custom = SourcePriority::new(["hdfc bank"]);

    assert!(custom.prefers("Google Pay", Some("swiggy@axisbank"), "HDFC Bank", Some("Swiggy")));
}

#[test]
fn test_config_builders_store_magnitudes() -> Result<()> {
    let config = EngineConfig::default()
        .with_merge_window(Duration::from_millis(500))
        .with_amount_tolerance(Decimal::from_str("-2.5")?)
        .with_max_gap_millis(-60_000)
        .with_source_priority(SourcePriority::new(["Axis Bank"]));

    assert_eq!(config.merge_window, Duration::from_millis(500));
    assert_eq!(config.amount_tolerance, Decimal::from_str("2.5")?);
    assert_eq!(config.max_gap_millis, 60_000);
    assert!(config.source_priority.prefers("Google Pay", Some("swiggy"), "Axis Bank", Some("SWIGGY LTD")));

    Ok(())
}

#[test]
fn test_pending_record_merge_fills_missing_fields_and_keeps_identity() -> Result<()> {
    let config = EngineConfig::default();
    let origin = create_transaction("State Bank of India", "250.00", 1_000, Some("MADURI A"))?;
    let origin_hash = origin.idempotency_hash.clone();

    let mut incoming = create_transaction("Google Pay", "250.40", 4_000, Some("Maduri Amulya"))?;
    incoming.reference = Some("094148183788".to_string());
    incoming.balance_after = Some(Decimal::from_str("1000")?);
    incoming.is_card = true;

    let mut pending = PendingRecord::new(origin, None);

    assert!(pending.matches(&incoming, &config));

    pending.merge(incoming, None, &config.source_priority);

    let record = pending.into_record(Categorization::uncategorized());

    assert_eq!(record.idempotency_hash, origin_hash);
    assert_eq!(record.amount, Decimal::from_str("-250.00")?);
    assert_eq!(record.timestamp, 1_000);
    assert_eq!(record.source, "State Bank of India");
    assert_eq!(record.merchant.as_deref(), Some("Maduri Amulya"));
    assert_eq!(record.reference.as_deref(), Some("094148183788"));
    assert_eq!(record.balance_after, Some(Decimal::from_str("1000")?));
    assert!(record.is_card);
    assert_eq!(record.notes.len(), 1);
    assert!(record.notes[0].starts_with("Merged duplicate from Google Pay"));

    Ok(())
}

#[test]
fn test_pending_record_match_respects_both_tolerances() -> Result<()> {
    let config = EngineConfig::default();
    let pending = PendingRecord::new(create_transaction("HDFC Bank", "500.00", 0, None)?, None);

    assert!(pending.matches(&create_transaction("Google Pay", "501.00", 120_000, None)?, &config));
    assert!(pending.matches(&create_transaction("Google Pay", "499.00", 0, None)?, &config));
    assert!(!pending.matches(&create_transaction("Google Pay", "501.01", 0, None)?, &config));
    assert!(!pending.matches(&create_transaction("Google Pay", "500.00", 120_001, None)?, &config));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_duplicates_from_two_senders_commit_once_with_a_breadcrumb() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    let first = create_transaction("State Bank of India", "500.00", 0, Some("MADURI AMULYA"))?;
    let first_hash = first.idempotency_hash.clone();

    assert_eq!(engine.process(first).await?, Observation::Buffered);
    assert_eq!(engine.process(create_transaction("Google Pay", "500.00", 3_000, Some("Maduri Amulya"))?).await?, Observation::Merged);
    assert_eq!(engine.pending().await?, 1);

    sleep(DEFAULT_MERGE_WINDOW + Duration::from_secs(1)).await;
    wait_for_records(&store, 1).await?;

    let records = store.records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].idempotency_hash, first_hash);
    assert_eq!(records[0].merchant.as_deref(), Some("Maduri Amulya"));
    assert_eq!(records[0].notes.len(), 1);
    assert!(records[0].notes[0].contains("Google Pay"));
    assert_eq!(engine.pending().await?, 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_observations_beyond_the_time_gap_commit_independently() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    assert_eq!(engine.process(create_transaction("HDFC Bank", "500.00", 0, None)?).await?, Observation::Buffered);
    assert_eq!(engine.process(create_transaction("Google Pay", "500.00", 200_000, None)?).await?, Observation::Displaced);

    wait_for_records(&store, 1).await?;

    sleep(DEFAULT_MERGE_WINDOW + Duration::from_secs(1)).await;
    wait_for_records(&store, 2).await?;

    assert_eq!(store.len(), 2);
    assert!(store.records().iter().all(|record| record.notes.is_empty()));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_amounts_beyond_tolerance_commit_independently() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    assert_eq!(engine.process(create_transaction("HDFC Bank", "500.00", 0, None)?).await?, Observation::Buffered);
    assert_eq!(engine.process(create_transaction("Google Pay", "502.00", 1_000, None)?).await?, Observation::Buffered);
    assert_eq!(engine.pending().await?, 2);

    sleep(DEFAULT_MERGE_WINDOW + Duration::from_secs(1)).await;
    wait_for_records(&store, 2).await?;

    assert_eq!(store.len(), 2);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_near_amounts_merge_across_a_rounding_boundary() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    assert_eq!(engine.process(create_transaction("HDFC Bank", "500.04", 0, None)?).await?, Observation::Buffered);
    assert_eq!(engine.process(create_transaction("Google Pay", "500.06", 2_000, None)?).await?, Observation::Merged);
    assert_eq!(engine.process(create_transaction("PhonePe", "500.90", 4_000, None)?).await?, Observation::Merged);

    assert_eq!(engine.shutdown().await?, 1);
    assert_eq!(store.len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_merge_restarts_the_commit_window() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    engine.process(create_transaction("HDFC Bank", "99.00", 0, None)?).await?;
    sleep(Duration::from_secs(8)).await;

    assert_eq!(engine.process(create_transaction("Paytm", "99.00", 8_000, None)?).await?, Observation::Merged);
    sleep(Duration::from_secs(5)).await;

    assert!(store.is_empty());
    assert_eq!(engine.pending().await?, 1);

    sleep(Duration::from_secs(6)).await;
    wait_for_records(&store, 1).await?;

    assert_eq!(engine.pending().await?, 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_merged_category_follows_the_more_confident_observation() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    let low = Categorization::new("Shopping", 0.4, CategorySource::Producer);
    let high = Categorization::new("Groceries", 0.9, CategorySource::Producer);

    engine.process_categorized(create_transaction("HDFC Bank", "120.00", 0, Some("Ravi Kumar"))?, low.clone()).await?;
    engine.process_categorized(create_transaction("Google Pay", "120.00", 1_000, Some("Ravi Kumar"))?, high).await?;

    engine.process_categorized(create_transaction("HDFC Bank", "800.00", 0, Some("Ravi Kumar"))?, low).await?;
    engine.process_categorized(
        create_transaction("Google Pay", "800.00", 1_000, Some("Ravi Kumar"))?,
        Categorization::new("Transport", 0.4, CategorySource::Producer)
    ).await?;

    engine.shutdown().await?;

    let records = store.records();
    let category_of = |amount: &str| -> Result<String> {
        let amount = -Decimal::from_str(amount)?;

        records.iter()
            .find(|record| record.amount == amount)
            .map(|record| record.category.clone())
            .ok_or_else(|| anyhow!("no record for {amount}"))
    };

    assert_eq!(records.len(), 2);
    assert_eq!(category_of("120.00")?, "Groceries");
    assert_eq!(category_of("800.00")?, "Shopping");

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_categorizer_result_is_used_when_no_category_is_pending() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    engine.process(create_transaction("HDFC Bank", "250.00", 0, Some("Swiggy"))?).await?;
    engine.process(create_transaction("Axis Bank", "60.00", 0, None)?).await?;
    engine.shutdown().await?;

    let records = store.records();
    let swiggy = records.iter().find(|record| record.merchant.as_deref() == Some("Swiggy"))
        .ok_or_else(|| anyhow!("swiggy record missing"))?;
    let unnamed = records.iter().find(|record| record.merchant.is_none())
        .ok_or_else(|| anyhow!("unnamed record missing"))?;

    assert_eq!(swiggy.category, "Food & Dining");
    assert_eq!(swiggy.category_source, CategorySource::Rule);
    assert_eq!(unnamed.category, "Uncategorized");

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_categorizer_failure_keeps_the_pending_category() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = DedupEngine::new(EngineConfig::default(), Arc::new(FailingCategorizer), store.clone(), Arc::new(DiscardingNotifier));

    engine.process_categorized(
        create_transaction("HDFC Bank", "250.00", 0, Some("Swiggy"))?,
        Categorization::new("Food & Dining", 0.7, CategorySource::Producer)
    ).await?;
    engine.process(create_transaction("Axis Bank", "60.00", 0, Some("Zepto"))?).await?;
    engine.shutdown().await?;

    let categories: Vec<String> = store.records().into_iter().map(|record| record.category).collect();

    assert_eq!(categories.len(), 2);
    assert!(categories.contains(&"Food & Dining".to_string()));
    assert!(categories.contains(&"Uncategorized".to_string()));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_persistence_failure_drops_the_record_without_stopping_the_engine() -> Result<()> {
    let (notifier, mut committed) = ChannelNotifier::channel();
    let engine = DedupEngine::new(EngineConfig::default(), Arc::new(KeywordCategorizer::new()), Arc::new(FailingStore), Arc::new(notifier));

    engine.process(create_transaction("HDFC Bank", "250.00", 0, None)?).await?;
    sleep(DEFAULT_MERGE_WINDOW + Duration::from_secs(1)).await;

    assert_eq!(engine.process(create_transaction("HDFC Bank", "90.00", 20_000, None)?).await?, Observation::Buffered);
    assert_eq!(engine.shutdown().await?, 1);

    sleep(Duration::from_millis(50)).await;

    assert!(committed.try_recv().is_err());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_notifier_is_called_after_persistence_and_failures_are_ignored() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let (notifier, mut committed) = ChannelNotifier::channel();
    let engine = DedupEngine::new(EngineConfig::default(), Arc::new(KeywordCategorizer::new()), store.clone(), Arc::new(notifier));

    let transaction = create_transaction("HDFC Bank", "250.00", 0, None)?;
    let hash = transaction.idempotency_hash.clone();

    engine.process(transaction).await?;
    engine.shutdown().await?;

    let notified = committed.recv().await.ok_or_else(|| anyhow!("no record was notified"))?;

    assert_eq!(notified.idempotency_hash, hash);
    assert_eq!(store.load(&hash), Some(notified));
    assert!(committed.recv().await.is_none());

    let store = Arc::new(MemoryTransactionStore::new());
    let (notifier, committed) = ChannelNotifier::channel();
    drop(committed);

    let engine = DedupEngine::new(EngineConfig::default(), Arc::new(KeywordCategorizer::new()), store.clone(), Arc::new(notifier));

    engine.process(create_transaction("HDFC Bank", "250.00", 0, None)?).await?;
    engine.shutdown().await?;

    assert_eq!(store.len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_producers_of_one_payment_commit_a_single_record() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());

    let sources = ["State Bank of India", "Google Pay", "PhonePe", "Paytm", "HDFC Bank", "Axis Bank", "Amazon Pay", "CRED"];

    let producers = sources.iter()
        .enumerate()
        .map(|(index, source)| {
            let producer = engine.clone();
            let transaction = create_transaction(source, "500.00", index as i64 * 1_000, Some("Ravi Kumar"));

            tokio::spawn(async move { producer.process(transaction?).await.map_err(anyhow::Error::from) })
        })
        .collect::<Vec<_>>();

    let mut observations = Vec::new();

    for result in join_all(producers).await {
        observations.push(result??);
    }

    assert_eq!(observations.iter().filter(|observation| **observation == Observation::Buffered).count(), 1);
    assert_eq!(observations.iter().filter(|observation| **observation == Observation::Merged).count(), sources.len() - 1);
    assert_eq!(engine.pending().await?, 1);

    sleep(DEFAULT_MERGE_WINDOW + Duration::from_secs(1)).await;
    wait_for_records(&store, 1).await?;

    sleep(DEFAULT_MERGE_WINDOW * 2).await;

    let records = store.records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].notes.len(), sources.len() - 1);
    assert_eq!(engine.pending().await?, 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_flushes_everything_pending() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let engine = create_engine(store.clone());
    let producer = engine.clone();

    producer.process(create_transaction("HDFC Bank", "10.00", 0, None)?).await?;
    producer.process(create_transaction("HDFC Bank", "20.00", 0, None)?).await?;
    producer.process(create_transaction("HDFC Bank", "30.00", 0, None)?).await?;

    assert_eq!(engine.shutdown().await?, 3);
    assert_eq!(store.len(), 3);
    assert_eq!(producer.pending().await?, 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_random_pairs_converge_or_stay_independent() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..40 {
        let store = Arc::new(MemoryTransactionStore::new());
        let engine = create_engine(store.clone());

        let base_cents: i64 = rng.gen_range(10_000..1_000_000);
        let within = rng.gen_bool(0.5);

        let (difference_cents, gap_millis): (i64, i64) = if within {
            (rng.gen_range(-100..=100), rng.gen_range(0..=120_000))
        } else if rng.gen_bool(0.5) {
            (rng.gen_range(101..5_000), rng.gen_range(0..=120_000))
        } else {
            (rng.gen_range(-100..=100), rng.gen_range(120_001..600_000))
        };

        let first = create_transaction("HDFC Bank", &Decimal::new(base_cents, 2).to_string(), 0, None)?;
        let second = create_transaction("Google Pay", &Decimal::new(base_cents + difference_cents, 2).to_string(), gap_millis, None)?;

        engine.process(first).await?;
        engine.process(second).await?;
        engine.shutdown().await?;

        let expected = if within { 1 } else { 2 };
        assert_eq!(store.len(), expected, "base {base_cents} difference {difference_cents} gap {gap_millis}");
    }

    Ok(())
}

#[tokio::test]
async fn test_pipeline_parses_merges_and_commits_a_message_file() -> Result<()> {
    let file = create_temporary_csv(&[
        ("VM-SBIUPI", 1_769_330_130_000, "Dear UPI user A/C X6495 debited by 250.00 on date 25Jan26 trf to MADURI AMULYA Refno 094148183788"),
        ("com.google.android.apps.nbu.paisa.user", 1_769_330_135_000, "You paid ₹250.00 to Maduri Amulya"),
        ("VM-SBIUPI", 1_769_330_140_000, "123456 is your OTP. Do not share"),
        ("+919876543210", 1_769_330_150_000, "Hey, are we still meeting today?"),
        ("AD-HDFCBK", 1_769_330_200_000, "Sent Rs.500.00\nFrom HDFC Bank A/C *1234\nTo SWIGGY\nOn 25/01/26\nRef 501234567890")
    ])?;

    let store = Arc::new(MemoryTransactionStore::new());
    let pipeline = Pipeline::new(Arc::new(HandlerRegistry::new()?), create_engine(store.clone()));

    let path = file.path().to_str().ok_or_else(|| anyhow!("temporary path is not valid UTF-8"))?;
    let summary = pipeline.run(path).await?;

    assert_eq!(summary, PipelineSummary { read: 5, parsed: 3, skipped: 2, merged: 1, displaced: 0 });
    assert_eq!(pipeline.finish().await?, 2);

    let records = store.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source, "State Bank of India");
    assert_eq!(records[0].amount, Decimal::from_str("-250")?);
    assert_eq!(records[0].merchant.as_deref(), Some("Maduri Amulya"));
    assert_eq!(records[0].reference.as_deref(), Some("094148183788"));
    assert_eq!(records[0].notes.len(), 1);
    assert_eq!(records[1].source, "HDFC Bank");
    assert_eq!(records[1].category, "Food & Dining");

    Ok(())
}

#[tokio::test]
async fn test_pipeline_skips_malformed_rows() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "sender,timestamp,body")?;
    writeln!(file, "VM-SBIUPI,not-a-timestamp,\"Dear UPI user A/C X6495 debited by 250.00\"")?;
    writeln!(file, "VM-SBIUPI,1000,\"Dear UPI user A/C X6495 debited by 75.00 on date 25Jan26 trf to RAVI KUMAR Refno 094148183700\"")?;

    let store = Arc::new(MemoryTransactionStore::new());
    let pipeline = Pipeline::new(Arc::new(HandlerRegistry::new()?), create_engine(store.clone()));

    let path = file.path().to_str().ok_or_else(|| anyhow!("temporary path is not valid UTF-8"))?;
    let summary = pipeline.run(path).await?;

    assert_eq!(summary.read, 1);
    assert_eq!(summary.parsed, 1);
    assert_eq!(pipeline.finish().await?, 1);
    assert_eq!(store.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_pipeline_handles_missing_file_without_error() -> Result<()> {
    let store = Arc::new(MemoryTransactionStore::new());
    let pipeline = Pipeline::new(Arc::new(HandlerRegistry::new()?), create_engine(store.clone()));

    assert_eq!(pipeline.run("missing.csv").await?, PipelineSummary::default());
    assert_eq!(pipeline.finish().await?, 0);
    assert!(store.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_pipeline_keeps_a_category_supplied_with_the_message() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "sender,timestamp,body,category")?;
    writeln!(file, "AD-HDFCBK,1000,\"Sent Rs.500.00\nFrom HDFC Bank A/C *1234\nTo SWIGGY\nOn 25/01/26\nRef 501234567890\",Team Lunch")?;
    writeln!(file, "AD-HDFCBK,2000,\"Sent Rs.90.00\nFrom HDFC Bank A/C *1234\nTo ZEPTO\nOn 25/01/26\nRef 501234567891\"")?;

    let store = Arc::new(MemoryTransactionStore::new());
    let pipeline = Pipeline::new(Arc::new(HandlerRegistry::new()?), create_engine(store.clone()));

    let path = file.path().to_str().ok_or_else(|| anyhow!("temporary path is not valid UTF-8"))?;

    assert_eq!(pipeline.run(path).await?.parsed, 2);
    assert_eq!(pipeline.finish().await?, 2);

    let records = store.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category, "Team Lunch");
    assert_eq!(records[0].category_source, CategorySource::Producer);
    assert_eq!(records[0].confidence, 1.0);
    assert_eq!(records[1].category, "Groceries");
    assert_eq!(records[1].category_source, CategorySource::Rule);

    Ok(())
}
