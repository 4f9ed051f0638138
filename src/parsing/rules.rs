use regex::Regex;

use crate::models::Direction;
use crate::parsing::errors::RuleError;

/// Ordered pattern lists per extracted field.
///
/// Every pattern carries exactly one capture group holding the value, except
/// `direction` and `card` which only need to match. Within a list the first
/// pattern that matches wins.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub amount: &'static [&'static str],
    pub direction: &'static [(&'static str, Direction)],
    pub counterparty: &'static [&'static str],
    pub reference: &'static [&'static str],
    pub account_suffix: &'static [&'static str],
    pub balance: &'static [&'static str],
    pub card: &'static [&'static str]
}

impl RuleTable {
    pub const EMPTY: RuleTable = RuleTable {
        amount: &[],
        direction: &[],
        counterparty: &[],
        reference: &[],
        account_suffix: &[],
        balance: &[],
        card: &[]
    };
}

/// Everything that distinguishes one issuer or channel from another, as plain data.
#[derive(Debug, Clone, Copy)]
pub struct IssuerProfile {
    pub label: &'static str,
    /// Case-insensitive substrings of sender ids or app package ids.
    pub senders: &'static [&'static str],
    /// Regular expressions tried against the trimmed sender id.
    pub sender_patterns: &'static [&'static str],
    pub currency: &'static str,
    /// Issuer exclusions layered after the shared message filter.
    pub exclusions: &'static [&'static str],
    /// Issuer wording that also counts as a transaction keyword.
    pub keywords: &'static [&'static str],
    pub rules: RuleTable
}

impl IssuerProfile {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            senders: &[],
            sender_patterns: &[],
            currency: crate::types::BASE_CURRENCY,
            exclusions: &[],
            keywords: &[],
            rules: RuleTable::EMPTY
        }
    }
}

/// A [`RuleTable`] with every pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub amount: Vec<Regex>,
    pub direction: Vec<(Regex, Direction)>,
    pub counterparty: Vec<Regex>,
    pub reference: Vec<Regex>,
    pub account_suffix: Vec<Regex>,
    pub balance: Vec<Regex>,
    pub card: Vec<Regex>
}

impl CompiledRules {
    pub fn compile(label: &'static str, table: &RuleTable) -> Result<Self, RuleError> {
        let direction = table.direction.iter()
            .map(|(pattern, direction)| Ok((compile_pattern(label, pattern)?, *direction)))
            .collect::<Result<Vec<_>, RuleError>>()?;

        Ok(Self {
            amount: compile_all(label, table.amount)?,
            direction,
            counterparty: compile_all(label, table.counterparty)?,
            reference: compile_all(label, table.reference)?,
            account_suffix: compile_all(label, table.account_suffix)?,
            balance: compile_all(label, table.balance)?,
            card: compile_all(label, table.card)?
        })
    }
}

pub fn compile_pattern(label: &'static str, pattern: &'static str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|error| RuleError::invalid_pattern(label, pattern, error))
}

pub fn compile_all(label: &'static str, patterns: &[&'static str]) -> Result<Vec<Regex>, RuleError> {
    patterns.iter()
        .map(|pattern| compile_pattern(label, pattern))
        .collect()
}

/// First capture of the first pattern that matches, trimmed. Empty captures do not count.
pub fn first_capture<'t>(rules: &[Regex], text: &'t str) -> Option<&'t str> {
    rules.iter()
        .filter_map(|rule| rule.captures(text))
        .filter_map(|captures| captures.get(1))
        .map(|capture| capture.as_str().trim())
        .find(|value| !value.is_empty())
}
