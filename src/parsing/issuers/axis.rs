//! Axis Bank: line-oriented alerts with a `UPI/P2M/<ref>/<payee>` trailer, and card spends
//! whose merchant sits on the line after the timestamp.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["axisbk", "axisbank", "axismr", "com.axis.mobile"],
    exclusions: &[r"(?i)\bedge\s+reward\s+points\b"],
    rules: RuleTable {
        amount: &[r"(?i)\binr\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s+(?:debited|credited)\b"],
        counterparty: &[
            r"(?i)\bupi/p2[am]/\d+/([^\n/]+)",
            r"(?m)^\d{2}-\d{2}-\d{2},?\s+\d{2}:\d{2}:\d{2}\s*\n([^\n]+)"
        ],
        reference: &[r"(?i)\bupi/p2[am]/(\d{6,})"],
        account_suffix: &[
            r"(?i)\ba/c\s+no\.?\s*x+(\d{4})\b",
            r"(?i)\bcard\s+no\.?\s*x+(\d{4})\b"
        ],
        card: &[r"(?i)\bcard\s+no\.?\s*x+\d{4}\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Axis Bank")
};
