//! ICICI Bank: "Acct XX123 debited for Rs ...; PAYEE credited" UPI alerts and card spends.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["icicib", "icicit", "icicibank", "com.csam.icici"],
    exclusions: &[
        r"(?i)\breward\s+points\b",
        r"(?i)\bstatement\s+(?:for|is)\b"
    ],
    rules: RuleTable {
        amount: &[
            r"(?i)\b(?:debited|credited)\s+(?:for|with)\s+(?:rs\.?|inr)\s*([0-9][0-9,]*(?:\.[0-9]+)?)",
            r"(?i)\binr\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s+spent\b"
        ],
        counterparty: &[
            r"(?i);\s*(.+?)\s+credited\b",
            r"(?i)\bfrom\s+(.+?)\.\s*upi\b",
            r"(?i)\bon\s+\d{2}-[A-Za-z]{3}-\d{2}\s+on\s+(.+?)\.\s"
        ],
        reference: &[r"(?i)\bupi:\s*(\d{6,})"],
        account_suffix: &[
            r"(?i)\bacct\s*x+(\d{3,4})\b",
            r"(?i)\bcard\s*x+(\d{4})\b"
        ],
        card: &[r"(?i)\bicici\s+bank\s+(?:credit\s+)?card\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("ICICI Bank")
};
