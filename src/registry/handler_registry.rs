use std::sync::Arc;

use tracing::debug;

use crate::models::ParsedTransaction;
use crate::parsing::issuers::PROFILES;
use crate::parsing::{heuristics, FormatHandler, IssuerProfile, MessageFilter, RuleError};
use crate::types::TimestampMillis;

/// Ordered list of format handlers; the first one that recognizes a sender owns its messages.
///
/// Immutable once built, so it can be shared across producers without locking.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: Vec<FormatHandler>
}

impl HandlerRegistry {
    /// Builds the registry with every built-in issuer in priority order.
    pub fn new() -> Result<Self, RuleError> {
        Self::with_profiles(PROFILES)
    }

    pub fn with_profiles(profiles: &[IssuerProfile]) -> Result<Self, RuleError> {
        let defaults = Arc::new(heuristics::compile_defaults()?);
        let shared_filter = MessageFilter::shared()?;

        let handlers = profiles.iter()
            .map(|profile| FormatHandler::compile(profile, &shared_filter, defaults.clone()))
            .collect::<Result<Vec<_>, RuleError>>()?;

        Ok(Self { handlers })
    }

    /// Handlers in the order `select` tries them.
    pub fn handlers(&self) -> &[FormatHandler] {
        &self.handlers
    }

    pub fn select(&self, sender_id: &str) -> Option<&FormatHandler> {
        self.handlers.iter().find(|handler| handler.recognizes(sender_id))
    }

    pub fn parse(&self, raw_text: &str, sender_id: &str, timestamp: TimestampMillis) -> Option<ParsedTransaction> {
        let Some(handler) = self.select(sender_id) else {
            debug!("No handler recognizes sender [{sender_id}]");
            return None;
        };

        handler.parse(raw_text, sender_id, timestamp)
    }
}
