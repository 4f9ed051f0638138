use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::trace;

use crate::collaborators::CategorizeError;
use crate::models::{Categorization, CategorySource};

/// Resolves a category for a merchant description, optionally using the amount as a hint.
#[async_trait]
pub trait Categorizer: Send + Sync + 'static {
    async fn categorize(&self, merchant_text: &str, amount: Option<Decimal>) -> Result<Categorization, CategorizeError>;
}

const RULE_CONFIDENCE: f64 = 0.6;

const KEYWORD_RULES: &[(&[&str], &str, &str)] = &[
    (&["swiggy", "zomato", "dominos", "eatsure", "chai"], "Food & Dining", "Food Delivery"),
    (&["blinkit", "zepto", "bigbasket", "instamart", "dmart"], "Groceries", "Quick Commerce"),
    (&["amazon", "flipkart", "myntra", "ajio", "meesho"], "Shopping", "Online"),
    (&["uber", "olacabs", "rapido", "irctc", "metro"], "Transport", "Travel"),
    (&["airtel", "jio", "vodafone", "bsnl", "bescom", "electricity"], "Bills & Utilities", "Recharge & Utilities"),
    (&["netflix", "spotify", "hotstar", "primevideo", "youtube"], "Entertainment", "Subscriptions"),
    (&["credit card", "cred"], "Transfers", "Card Bill Payment"),
    (&["fund", "sip", "groww", "zerodha"], "Investments", "Mutual Funds"),
    (&["apollo", "pharmeasy", "1mg", "hospital", "clinic"], "Health", "Pharmacy & Care")
];

/// Keyword table lookup; the first rule whose keyword appears in the merchant text wins.
#[derive(Debug, Default, Clone)]
pub struct KeywordCategorizer;

impl KeywordCategorizer {
    pub fn new() -> Self {
        Self
    }

    fn lookup(merchant_text: &str) -> Option<Categorization> {
        let lowered = merchant_text.to_lowercase();

        KEYWORD_RULES.iter()
            .find(|(keywords, _, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map(|(_, category, subcategory)| {
                Categorization::new(*category, RULE_CONFIDENCE, CategorySource::Rule)
                    .with_subcategory(*subcategory)
            })
    }
}

#[async_trait]
impl Categorizer for KeywordCategorizer {
    async fn categorize(&self, merchant_text: &str, _amount: Option<Decimal>) -> Result<Categorization, CategorizeError> {
        let merchant_text = merchant_text.trim();

        if merchant_text.is_empty() {
            return Err(CategorizeError::EmptyMerchant);
        }

        let categorization = Self::lookup(merchant_text).unwrap_or_else(Categorization::uncategorized);

        trace!("Categorized [{merchant_text}] as [{}]", categorization.category);

        Ok(categorization)
    }
}
