//! Google Pay push notifications ("You paid ₹X to NAME", "NAME paid you ₹X").

use crate::models::Direction;
use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["com.google.android.apps.nbu.paisa.user", "nbu.paisa", "gpay", "googlepay", "google pay"],
    rules: RuleTable {
        amount: &[
            r"(?i)\bpaid\s+(?:you\s+)?₹\s*([0-9][0-9,]*(?:\.[0-9]+)?)",
            r"₹\s*([0-9][0-9,]*(?:\.[0-9]+)?)"
        ],
        direction: &[
            (r"(?i)\bpaid\s+you\b", Direction::Credit),
            (r"(?i)\byou\s+paid\b", Direction::Debit)
        ],
        counterparty: &[
            r"(?i)^\s*(.+?)\s+paid\s+you\b",
            r"(?i)\bpaid\s+(?:₹\s*[0-9][0-9,.]*\s+)?to\s+(.+?)(?:\s+using\b|\s+via\b|[.,]\s|[.,]?$)"
        ],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Google Pay")
};
