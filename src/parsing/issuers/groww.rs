//! Groww mutual fund orders and SIP instalments.

use crate::parsing::rules::{IssuerProfile, RuleTable};

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["groww", "com.nextbillion.groww"],
    exclusions: &[r"(?i)\bsip\s+(?:instalment\s+|installment\s+)?(?:has\s+)?(?:failed|cancelled|skipped)\b"],
    keywords: &[r"(?i)\b(?:sip|units\s+allotted|invested)\b"],
    rules: RuleTable {
        counterparty: &[r"(?i)\bin\s+(.+?)\s+(?:has\s+been|is|via)\b"],
        ..RuleTable::EMPTY
    },
    ..IssuerProfile::new("Groww")
};
