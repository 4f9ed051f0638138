use std::sync::Arc;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::models::{Direction, ParsedTransaction};
use crate::parsing::errors::RuleError;
use crate::parsing::filter::{FilterVerdict, MessageFilter};
use crate::parsing::heuristics::{accept_account_suffix, accept_reference, clean_counterparty, idempotency_hash};
use crate::parsing::rules::{compile_all, first_capture, CompiledRules, IssuerProfile};
use crate::types::{parse_amount, TimestampMillis};

/// Recognizes one issuer or channel and extracts transaction fields from its messages.
///
/// A handler is its [`IssuerProfile`] compiled, plus the shared defaults it
/// falls back to. Every extraction tries the issuer rules first and defers
/// to the defaults only when none of them yields a usable value.
#[derive(Debug, Clone)]
pub struct FormatHandler {
    label: &'static str,
    currency: &'static str,
    senders: Vec<String>,
    sender_patterns: Vec<Regex>,
    filter: MessageFilter,
    rules: CompiledRules,
    defaults: Arc<CompiledRules>
}

impl FormatHandler {
    pub fn compile(profile: &IssuerProfile, shared_filter: &MessageFilter, defaults: Arc<CompiledRules>) -> Result<Self, RuleError> {
        if profile.currency.len() != 3 || !profile.currency.chars().all(|character| character.is_ascii_uppercase()) {
            return Err(RuleError::invalid_currency(profile.label, profile.currency));
        }

        Ok(Self {
            label: profile.label,
            currency: profile.currency,
            senders: profile.senders.iter().map(|sender| sender.to_lowercase()).collect(),
            sender_patterns: compile_all(profile.label, profile.sender_patterns)?,
            filter: shared_filter.layered(profile.label, profile.exclusions, profile.keywords)?,
            rules: CompiledRules::compile(profile.label, &profile.rules)?,
            defaults
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn currency(&self) -> &'static str {
        self.currency
    }

    pub fn recognizes(&self, sender_id: &str) -> bool {
        let sender_id = sender_id.trim();

        if sender_id.is_empty() {
            return false;
        }

        let lowered = sender_id.to_lowercase();

        self.senders.iter().any(|sender| lowered.contains(sender.as_str()))
            || self.sender_patterns.iter().any(|pattern| pattern.is_match(sender_id))
    }

    pub fn extract_amount(&self, text: &str) -> Option<Decimal> {
        first_capture(&self.rules.amount, text).and_then(parse_amount)
            .or_else(|| first_capture(&self.defaults.amount, text).and_then(parse_amount))
    }

    pub fn extract_direction(&self, text: &str) -> Option<Direction> {
        let matched = |rules: &[(Regex, Direction)]| {
            rules.iter()
                .find(|(rule, _)| rule.is_match(text))
                .map(|(_, direction)| *direction)
        };

        matched(&self.rules.direction)
            .or_else(|| matched(&self.defaults.direction))
            .filter(|direction| *direction != Direction::Unknown)
    }

    pub fn extract_counterparty(&self, text: &str) -> Option<String> {
        first_capture(&self.rules.counterparty, text).and_then(clean_counterparty)
            .or_else(|| first_capture(&self.defaults.counterparty, text).and_then(clean_counterparty))
    }

    pub fn extract_reference(&self, text: &str) -> Option<String> {
        first_capture(&self.rules.reference, text).and_then(accept_reference)
            .or_else(|| first_capture(&self.defaults.reference, text).and_then(accept_reference))
    }

    pub fn extract_account_suffix(&self, text: &str) -> Option<String> {
        first_capture(&self.rules.account_suffix, text).and_then(accept_account_suffix)
            .or_else(|| first_capture(&self.defaults.account_suffix, text).and_then(accept_account_suffix))
    }

    pub fn extract_balance(&self, text: &str) -> Option<Decimal> {
        first_capture(&self.rules.balance, text).and_then(parse_amount)
            .or_else(|| first_capture(&self.defaults.balance, text).and_then(parse_amount))
    }

    pub fn is_card_transaction(&self, text: &str) -> bool {
        self.rules.card.iter().any(|rule| rule.is_match(text))
            || self.defaults.card.iter().any(|rule| rule.is_match(text))
    }

    /// Filter, then the two required fields, then everything optional.
    ///
    /// Never fails loudly: filtered text and missing amount or direction all
    /// come back as `None`.
    pub fn parse(&self, text: &str, sender_id: &str, timestamp: TimestampMillis) -> Option<ParsedTransaction> {
        let verdict = self.filter.verdict(text);

        if verdict != FilterVerdict::Transactional {
            debug!("[{}] skipped message from [{sender_id}]: {verdict:?}", self.label);
            return None;
        }

        let Some(amount) = self.extract_amount(text) else {
            debug!("[{}] found no amount in message from [{sender_id}]", self.label);
            return None;
        };

        let Some(direction) = self.extract_direction(text) else {
            debug!("[{}] found no direction in message from [{sender_id}]", self.label);
            return None;
        };

        let transaction = ParsedTransaction {
            amount,
            direction,
            counterparty: self.extract_counterparty(text),
            reference: self.extract_reference(text),
            account_suffix: self.extract_account_suffix(text),
            balance_after: self.extract_balance(text),
            timestamp,
            source_name: self.label.to_string(),
            currency: self.currency.to_string(),
            idempotency_hash: idempotency_hash(sender_id, amount, text),
            is_card: self.is_card_transaction(text)
        };

        trace!("[{}] parsed {transaction:?}", self.label);

        Some(transaction)
    }
}
