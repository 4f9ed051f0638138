//! Kotak Mahindra Bank: "Sent Rs.X from Kotak Bank AC X1234 to payee@vpa on ..." alerts.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["kotak", "com.msf.kbank"],
    exclusions: &[r"(?i)\bautopay\s+(?:mandate|registered)\b"],
    rules: RuleTable {
        amount: &[r"(?i)\b(?:sent|received)\s+rs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)"],
        counterparty: &[
            r"(?i)\bto\s+([A-Za-z0-9._-]+@[A-Za-z0-9.-]+?)\s+on\b",
            r"(?i)\bfrom\s+([A-Za-z0-9._-]+@[A-Za-z0-9.-]+?)\s+on\b"
        ],
        reference: &[r"(?i)\bupi\s+ref:?\s*(\d{6,})"],
        account_suffix: &[r"(?i)\bac\s+x(\d{4})\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Kotak Mahindra Bank")
};
