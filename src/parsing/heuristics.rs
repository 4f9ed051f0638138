use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::models::Direction;
use crate::parsing::errors::RuleError;
use crate::parsing::rules::{CompiledRules, RuleTable};

pub const LABEL: &str = "Heuristics";

/// Shared extraction rules for the INR message conventions every issuer falls back to.
pub const DEFAULT_RULES: RuleTable = RuleTable {
    amount: &[
        r"(?i)(?:\brs\.?|\binr|₹)\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)",
        r"(?i)\b(?:debited|credited|paid|sent|received|spent|withdrawn|transferred)\s+(?:by|for|with|of)\s+([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    ],
    direction: &[
        (r"(?i)\b(?:sip|units allotted|mutual fund|invested)\b", Direction::Investment),
        (r"(?i)\b(?:refund(?:ed)?|revers(?:ed|al))\b.*\b(?:credited|to\s+your)\b|\bcredited\b.*\b(?:refund|reversal)\b", Direction::Credit),
        (r"(?i)\b(?:debited|spent|withdrawn|deducted|paid|sent|purchase)\b", Direction::Debit),
        (r"(?i)\b(?:credited|received|deposited|refund(?:ed)?)\b", Direction::Credit),
        (r"(?i)\btransferred\b", Direction::Transfer)
    ],
    counterparty: &[
        r"(?i)\b(?:paid|sent)\s+to\s+([A-Za-z][A-Za-z0-9@._&' -]{1,40}?)(?:\s+(?:on|ref|upi|via|using|from|avl)\b|[.,;(]|$)",
        r"(?i)\bat\s+([A-Za-z][A-Za-z0-9@._&' -]{1,40}?)(?:\s+(?:on|ref|upi|via|using|avl)\b|[.,;(]|$)",
        r"(?i)\bvpa\s+([A-Za-z0-9._-]+@[A-Za-z0-9.-]+)",
        r"(?i)\bto\s+([A-Za-z][A-Za-z0-9@._&' -]{1,40}?)(?:\s+(?:on|ref|upi|via|using|from|avl)\b|[.,;(]|$)",
        r"(?i)\bfrom\s+([A-Za-z][A-Za-z0-9@._&' -]{1,40}?)(?:\s+(?:on|ref|upi|via|using|in|avl)\b|[.,;(]|$)"
    ],
    reference: &[
        r"(?i)\b(?:ref(?:erence)?\.?\s*(?:no\.?|number|id)?|utr(?:\s*no\.?)?|txn\s*id|rrn)\s*[:.#-]?\s*([A-Za-z0-9]{6,})"
    ],
    account_suffix: &[
        r"(?i)\b(?:a/c|acct|account|ac)\s*(?:no\.?\s*)?(?:ending\s*(?:with|in)?\s*)?[x*.]*\s*(\d{3,4})\b",
        r"(?i)\bcard\s*(?:no\.?\s*)?(?:ending\s*(?:with|in)?\s*)?[x*]*\s*(\d{4})\b"
    ],
    balance: &[
        r"(?i)\b(?:avl\.?\s*bal(?:ance)?|available\s+bal(?:ance)?|a/c\s+bal(?:ance)?|total\s+bal(?:ance)?|updated\s+balance|bal)\b\s*(?:is|:|-)?\s*(?:\brs\.?|\binr|₹)?\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    ],
    card: &[
        r"(?i)\b(?:credit|debit)\s+card\b",
        r"(?i)\bcard\s*(?:no\.?\s*)?(?:ending|x+|\*+|\d{4})"
    ]
};

pub fn compile_defaults() -> Result<CompiledRules, RuleError> {
    CompiledRules::compile(LABEL, &DEFAULT_RULES)
}

/// Tidies a captured merchant or counterparty label.
///
/// UPI handles keep their lower-case form, shouty names are title-cased, and
/// values that are purely numeric or a single character are rejected.
pub fn clean_counterparty(value: &str) -> Option<String> {
    let trimmed = value
        .trim_matches(|character: char| character.is_whitespace() || ".,;:-()'\"".contains(character));

    let trimmed = strip_prefix_ignore_case(trimmed, "vpa ").unwrap_or(trimmed).trim();
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().filter(|character| character.is_alphanumeric()).count() < 2 {
        return None;
    }

    if collapsed.chars().all(|character| character.is_ascii_digit() || character.is_whitespace()) {
        return None;
    }

    if collapsed.contains('@') {
        return Some(collapsed.to_lowercase());
    }

    let has_lowercase = collapsed.chars().any(|character| character.is_lowercase());

    if has_lowercase {
        Some(collapsed)
    } else {
        Some(title_case(&collapsed))
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;

    if head.eq_ignore_ascii_case(prefix) {
        value.get(prefix.len()..)
    } else {
        None
    }
}

fn title_case(value: &str) -> String {
    value.split(' ')
        .map(|word| {
            let mut characters = word.chars();
            match characters.next() {
                Some(first) => first.to_uppercase().chain(characters.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// References with fewer than six alphanumeric characters are treated as noise.
pub fn accept_reference(value: &str) -> Option<String> {
    let value = value.trim().trim_matches('-');
    let alphanumeric = value.chars().filter(|character| character.is_ascii_alphanumeric()).count();

    if alphanumeric >= 6 && value.chars().all(|character| character.is_ascii_alphanumeric() || character == '-') {
        Some(value.to_string())
    } else {
        None
    }
}

pub fn accept_account_suffix(value: &str) -> Option<String> {
    let value = value.trim();

    if (3..=4).contains(&value.len()) && value.chars().all(|character| character.is_ascii_digit()) {
        Some(value.to_string())
    } else {
        None
    }
}

/// Deterministic fingerprint of one observed message.
///
/// Identical `(sender, amount, raw text)` triples always hash identically,
/// regardless of sender id casing or surrounding whitespace.
pub fn idempotency_hash(sender_id: &str, amount: Decimal, raw_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sender_id.trim().to_lowercase().as_bytes());
    hasher.update([0x1f]);
    hasher.update(amount.normalize().to_string().as_bytes());
    hasher.update([0x1f]);
    hasher.update(raw_text.as_bytes());
    hex::encode(hasher.finalize())
}
