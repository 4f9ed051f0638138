use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use rust_decimal::Decimal;
use tracing::trace;

use crate::collaborators::categorizer::Categorizer;
use crate::collaborators::CategorizeError;
use crate::models::{Categorization, CategorySource};

/// Memoizes another categorizer by normalized merchant text.
///
/// Only successful answers are cached. A cached answer is reported with
/// [`CategorySource::Cache`] so stored records show where it came from.
pub struct CachedCategorizer<C: Categorizer> {
    inner: C,
    cache: Cache<String, Categorization>
}

impl<C: Categorizer> CachedCategorizer<C> {
    pub fn new(inner: C) -> Self {
        Self::with_limits(inner, 10_000, Duration::from_secs(60 * 60))
    }

    pub fn with_limits(inner: C, capacity: u64, time_to_live: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(time_to_live)
                .build()
        }
    }

    fn cache_key(merchant_text: &str) -> String {
        merchant_text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[async_trait]
impl<C: Categorizer> Categorizer for CachedCategorizer<C> {
    async fn categorize(&self, merchant_text: &str, amount: Option<Decimal>) -> Result<Categorization, CategorizeError> {
        let key = Self::cache_key(merchant_text);

        if let Some(mut hit) = self.cache.get(&key).await {
            trace!("Category cache hit for [{key}]");
            hit.source = CategorySource::Cache;
            return Ok(hit);
        }

        let categorization = self.inner.categorize(merchant_text, amount).await?;
        self.cache.insert(key, categorization.clone()).await;

        Ok(categorization)
    }
}
