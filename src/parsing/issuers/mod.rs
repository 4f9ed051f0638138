mod amazon_pay;
mod axis;
mod baroda;
mod cred;
mod generic;
mod google_pay;
mod groww;
mod hdfc;
mod icici;
mod kotak;
mod paytm;
mod phonepe;
mod sbi;

use crate::parsing::rules::IssuerProfile;

/// Registry order. A profile with looser sender recognition must come after
/// every profile it could shadow, and the generic catch-all comes last.
pub const PROFILES: &[IssuerProfile] = &[
    sbi::PROFILE,
    hdfc::PROFILE,
    icici::PROFILE,
    axis::PROFILE,
    kotak::PROFILE,
    baroda::PROFILE,
    paytm::PROFILE,
    google_pay::PROFILE,
    phonepe::PROFILE,
    amazon_pay::PROFILE,
    cred::PROFILE,
    groww::PROFILE,
    generic::PROFILE
];
