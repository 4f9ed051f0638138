//! HDFC Bank: multi-line UPI alerts ("Sent Rs.X / From ... / To ..."), card spends
//! and NEFT credits.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["hdfcbk", "hdfcbn", "hdfcbank", "com.snapwork.hdfc"],
    exclusions: &[
        r"(?i)\bstatement\s+(?:is\s+)?ready\b",
        r"(?i)\breward\s+points\b"
    ],
    keywords: &[r"(?i)\bdeposited\b"],
    rules: RuleTable {
        amount: &[r"(?i)\b(?:sent|spent)\s+rs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)"],
        counterparty: &[
            r"(?im)^to\s+(.+?)\s*$",
            r"(?i)\bat\s+(.+?)\s+on\s+\d",
            r"(?i)\bfrom\s+vpa\s+(\S+)",
            r"(?i)\bneft\s+cr-[A-Za-z0-9]+-(.+?)-"
        ],
        reference: &[
            r"(?im)^ref\s+(\d{6,})",
            r"(?i)\(upi\s+(\d{6,})\)"
        ],
        account_suffix: &[
            r"(?i)\ba/c\s*[x*]*(\d{4})\b",
            r"(?i)\bcard\s+x*(\d{4})\b"
        ],
        card: &[r"(?i)\bhdfc\s+bank\s+card\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("HDFC Bank")
};
