use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    Rule,
    Cache,
    Producer,
    Fallback
}

/// A category decision together with how sure its producer is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    pub category: String,
    pub subcategory: Option<String>,
    pub merchant_name: Option<String>,
    /// Between 0.0 and 1.0.
    pub confidence: f64,
    pub source: CategorySource
}

impl Categorization {
    pub fn new(category: impl Into<String>, confidence: f64, source: CategorySource) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
            merchant_name: None,
            confidence: confidence.clamp(0.0, 1.0),
            source
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn uncategorized() -> Self {
        Self::new("Uncategorized", 0.0, CategorySource::Fallback)
    }

    /// Keeps whichever side is more confident. Ties favor `existing`.
    pub fn pick(existing: Option<Categorization>, incoming: Option<Categorization>) -> Option<Categorization> {
        match (existing, incoming) {
            (Some(existing), Some(incoming)) => {
                if incoming.confidence > existing.confidence {
                    Some(incoming)
                } else {
                    Some(existing)
                }
            }
            (existing, incoming) => existing.or(incoming)
        }
    }
}
