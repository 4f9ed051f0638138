//! Amazon Pay UPI payments, wallet top-ups and refunds.

use crate::models::Direction;
use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["in.amazon.mshop.android.shopping", "amazonpay", "amazon pay", "amznpy"],
    exclusions: &[r"(?i)\bpay\s+later\s+limit\b"],
    keywords: &[r"(?i)\badded\s+to\s+(?:your\s+)?amazon\s+pay\s+balance\b"],
    rules: RuleTable {
        direction: &[(r"(?i)\badded\s+to\s+(?:your\s+)?amazon\s+pay\s+balance\b", Direction::Transfer)],
        counterparty: &[r"(?i)\bpaid\s+₹\s*[0-9][0-9,.]*\s+to\s+(.+?)\s+using\b"],
        reference: &[r"(?i)\border\s+(\d{3}-\d{7}-\d{7})"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Amazon Pay")
};
