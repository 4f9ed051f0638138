mod errors;
mod filter;
mod handler;
pub mod heuristics;
pub mod issuers;
mod rules;

pub use errors::RuleError;
pub use filter::MessageFilter;
pub use handler::FormatHandler;
pub use rules::IssuerProfile;
