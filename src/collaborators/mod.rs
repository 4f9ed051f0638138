mod cache;
mod categorizer;
mod errors;
mod notifier;

pub use cache::CachedCategorizer;
pub use categorizer::{Categorizer, KeywordCategorizer};
pub use errors::{CategorizeError, NotifyError};
pub use notifier::{ChannelNotifier, Notifier};
