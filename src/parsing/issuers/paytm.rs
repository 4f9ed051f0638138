//! Paytm wallet and Paytm Payments Bank notifications.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["net.one97.paytm", "paytm", "ppbl"],
    exclusions: &[
        r"(?i)\bpaytm\s+first\s+points\b",
        r"(?i)\bcashback\s+points\b"
    ],
    rules: RuleTable {
        counterparty: &[
            r"(?i)\bpaid\s+rs\.?\s*[0-9][0-9,.]*\s+to\s+(.+?)\s+from\b",
            r"(?i)\breceived\s+rs\.?\s*[0-9][0-9,.]*\s+from\s+(.+?)\s+in\s+your\b",
            r"(?i)\bsent\s+to\s+(.+?)\s+from\b"
        ],
        account_suffix: &[r"(?i)\ba/c\s*\d*x+(\d{4})\b"],
        balance: &[r"(?i)\bupdated\s+balance:\s*paytm\s+wallet-?\s*rs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Paytm")
};
