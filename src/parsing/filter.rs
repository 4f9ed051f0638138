use regex::Regex;

use crate::parsing::errors::RuleError;
use crate::parsing::rules::{compile_all, compile_pattern};

const LABEL: &str = "Message filter";

const ONE_TIME_CODE: &[&str] = &[
    r"(?i)\b(?:otp|one[- ]time\s+(?:password|pin|code)|verification\s+code|auth(?:entication)?\s+code|security\s+code)\b",
    r"(?i)\bis\s+your\s+(?:\w+\s+)?(?:code|pin)\b"
];

const PROMOTION: &[&str] = &[
    r"(?i)\b(?:offers?|discount|congratulations|pre-?approved|apply\s+now|limited\s+period|vouchers?|coupons?|win\s+up\s*to)\b"
];

const PAYMENT_REQUEST: &[&str] = &[
    r"(?i)\b(?:has\s+requested|requested\s+(?:money|payment)|collect\s+request|payment\s+reminder|is\s+due|due\s+(?:on|by|date)|bill\s+(?:is\s+)?due|pay\s+now)\b"
];

const EXPIRY: &[&str] = &[
    r"(?i)\b(?:will\s+expire|expires?\s+on|expiring|valid\s+(?:till|until|upto|up\s+to)|validity)\b"
];

const DEBIT_KEYWORDS: &str = r"(?i)\b(?:debited|spent|withdrawn|paid|purchase)\b";

const TRANSACTION_KEYWORDS: &str = r"(?i)\b(?:debited|credited|paid|received|sent|withdrawn|transferred|spent|purchase)\b";

/// Why a message was let through or turned away.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FilterVerdict {
    Transactional,
    OneTimeCode,
    Promotion,
    PaymentRequest,
    Expiry,
    IssuerExclusion,
    NoTransactionKeyword
}

/// Rejects non-transactional text before any extraction is attempted.
///
/// Shared exclusion groups are checked in a fixed order (one-time codes,
/// promotions without a debit keyword, payment requests, expiry notices),
/// then issuer exclusions, and finally at least one transaction keyword must
/// be present. Issuers can add exclusions and keywords but never remove the
/// shared ones.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    one_time_code: Vec<Regex>,
    promotion: Vec<Regex>,
    payment_request: Vec<Regex>,
    expiry: Vec<Regex>,
    debit_keywords: Regex,
    transaction_keywords: Vec<Regex>,
    issuer_exclusions: Vec<Regex>
}

impl MessageFilter {
    pub fn shared() -> Result<Self, RuleError> {
        Ok(Self {
            one_time_code: compile_all(LABEL, ONE_TIME_CODE)?,
            promotion: compile_all(LABEL, PROMOTION)?,
            payment_request: compile_all(LABEL, PAYMENT_REQUEST)?,
            expiry: compile_all(LABEL, EXPIRY)?,
            debit_keywords: compile_pattern(LABEL, DEBIT_KEYWORDS)?,
            transaction_keywords: vec![compile_pattern(LABEL, TRANSACTION_KEYWORDS)?],
            issuer_exclusions: Vec::new()
        })
    }

    /// A copy of this filter with issuer exclusions and keywords layered on top.
    pub fn layered(&self, label: &'static str, exclusions: &[&'static str], keywords: &[&'static str]) -> Result<Self, RuleError> {
        let mut filter = self.clone();
        filter.issuer_exclusions.extend(compile_all(label, exclusions)?);
        filter.transaction_keywords.extend(compile_all(label, keywords)?);
        Ok(filter)
    }

    pub fn verdict(&self, text: &str) -> FilterVerdict {
        if matches_any(&self.one_time_code, text) {
            return FilterVerdict::OneTimeCode;
        }

        if matches_any(&self.promotion, text) && !self.debit_keywords.is_match(text) {
            return FilterVerdict::Promotion;
        }

        if matches_any(&self.payment_request, text) {
            return FilterVerdict::PaymentRequest;
        }

        if matches_any(&self.expiry, text) {
            return FilterVerdict::Expiry;
        }

        if matches_any(&self.issuer_exclusions, text) {
            return FilterVerdict::IssuerExclusion;
        }

        if !matches_any(&self.transaction_keywords, text) {
            return FilterVerdict::NoTransactionKeyword;
        }

        FilterVerdict::Transactional
    }
}

fn matches_any(rules: &[Regex], text: &str) -> bool {
    rules.iter().any(|rule| rule.is_match(text))
}
