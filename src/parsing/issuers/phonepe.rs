//! PhonePe push notifications.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["com.phonepe.app", "phonepe"],
    exclusions: &[
        r"(?i)\bscratch\s+card\b",
        r"(?i)\bphonepe\s+rewards?\b"
    ],
    rules: RuleTable {
        amount: &[r"(?i)\b(?:paid|received|sent)\s+₹\s*([0-9][0-9,]*(?:\.[0-9]+)?)"],
        counterparty: &[
            r"(?i)\b(?:paid|sent)\s+₹\s*[0-9][0-9,.]*\s+to\s+(.+?)(?:\s+from\b|\s+using\b|[.,]\s|[.,]?$)",
            r"(?i)\breceived\s+₹\s*[0-9][0-9,.]*\s+from\s+(.+?)(?:\s+in\b|[.,]\s|[.,]?$)",
            r"(?i)\bfor\s+paying\s+(.+?)(?:[.,]\s|[.,]?$)"
        ],
        account_suffix: &[r"(?i)\bbank\s+x+(\d{4})\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("PhonePe")
};
