//! Bank of Baroda: terse "Rs.X Dr. from A/C ... and Cr. to payee" alerts that carry none
//! of the usual transaction verbs.

use crate::models::Direction;
use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["bobtxn", "bobsms", "barodampay", "bankofbaroda"],
    keywords: &[r"(?i)\b(?:dr|cr)\.\s+(?:from|to)\b"],
    rules: RuleTable {
        amount: &[r"(?i)\brs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s+(?:dr\.|cr\.|credited|debited)"],
        direction: &[
            (r"(?i)\bdr\.\s+from\b", Direction::Debit),
            (r"(?i)\bcredited\s+to\s+a/c\b", Direction::Credit)
        ],
        counterparty: &[
            r"(?i)\bcr\.\s+to\s+(\S+?)\.\s",
            r"(?i)\bby\s+([A-Za-z0-9._-]+@[A-Za-z0-9.-]+?)\."
        ],
        reference: &[
            r"(?i)\bref:\s*(\d{6,})",
            r"(?i)\bupi/(\d{6,})"
        ],
        account_suffix: &[r"(?i)\ba/c\s*[x.]*(\d{4})\b"],
        balance: &[
            r"(?i)\bavlbal:\s*rs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)",
            r"(?i)\bavlbl\s+amt:\s*rs\.?\s*([0-9][0-9,]*(?:\.[0-9]+)?)"
        ],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Bank of Baroda")
};
