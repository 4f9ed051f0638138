//! State Bank of India: UPI alerts ("Dear UPI user A/C X1234 debited by ...") and
//! core banking "has credit/has a debit" alerts.

use crate::models::Direction;
use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["sbiupi", "sbiinb", "sbipsg", "atmsbi", "cbssbi", "sbicrd", "com.sbi.lotusintouch"],
    exclusions: &[
        r"(?i)\bsbi\s+rewardz?\b",
        r"(?i)\byono\s+cash\s+code\b"
    ],
    keywords: &[r"(?i)\bhas\s+(?:a\s+)?(?:credit|debit)\b"],
    rules: RuleTable {
        amount: &[r"(?i)\b(?:debited|credited)\s+by\s+(?:rs\.?\s*)?([0-9][0-9,]*(?:\.[0-9]+)?)"],
        direction: &[
            (r"(?i)\bhas\s+credit\b", Direction::Credit),
            (r"(?i)\bhas\s+a\s+debit\b", Direction::Debit)
        ],
        counterparty: &[
            r"(?i)\btrf\s+to\s+(.+?)\s+ref\s*no\b",
            r"(?i)\btransfer\s+from\s+(.+?)\s+ref\s*no\b"
        ],
        reference: &[r"(?i)\bref\s*no\.?\s*:?\s*([A-Za-z0-9]+)"],
        account_suffix: &[r"(?i)\ba/c\s*x+(\d{3,4})\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("State Bank of India")
};
