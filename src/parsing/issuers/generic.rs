//! Catch-all for bank senders without a dedicated profile: DLT style headers such as
//! `JD-FEDBNK` and anything naming itself a bank. Must stay last in the registry.

use crate::parsing::rules::IssuerProfile;

pub const PROFILE: IssuerProfile = IssuerProfile {
    senders: &["bank"],
    sender_patterns: &[r"^[A-Za-z]{2}-[A-Za-z0-9]{5,8}(?:-[A-Za-z])?$"],
    ..IssuerProfile::new("Bank")
};
