//! CRED credit card bill payments. Paying a card bill moves money between the
//! user's own instruments, so it is recorded as a transfer.

use crate::models::Direction;
use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["com.dreamplug.androidapp"],
    sender_patterns: &[r"(?i)^(?:[a-z]{2}-)?cred(?:club|in)?(?:-[a-z])?$"],
    exclusions: &[r"(?i)\bcred\s+coins\b"],
    keywords: &[r"(?i)\bpayment\s+of\b.*\bis\s+successful\b"],
    rules: RuleTable {
        amount: &[r"(?i)\bpayment\s+of\s+₹\s*([0-9][0-9,]*(?:\.[0-9]+)?)"],
        direction: &[(r"(?i)\btowards\b.*\bcredit\s+card\b", Direction::Transfer)],
        counterparty: &[r"(?i)\btowards\s+(.+?)\s+(?:x+\d{4}\s+)?is\s+successful\b"],
        account_suffix: &[r"(?i)\bcard\s+x+(\d{4})\b"],
        card: &[r"(?i)\bcredit\s+card\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("CRED")
};
