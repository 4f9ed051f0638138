use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule error: pattern [{pattern}] for [{label}] does not compile: {source}")]
    InvalidPattern {
        label: &'static str,
        pattern: &'static str,
        #[source]
        source: regex::Error
    },
    #[error("Rule error: currency [{currency}] for [{label}] is not a three letter code")]
    InvalidCurrency {
        label: &'static str,
        currency: &'static str
    }
}

impl RuleError {
    pub fn invalid_pattern(label: &'static str, pattern: &'static str, source: regex::Error) -> Self {
        Self::InvalidPattern { label, pattern, source }
    }

    pub fn invalid_currency(label: &'static str, currency: &'static str) -> Self {
        Self::InvalidCurrency { label, currency }
    }
}
