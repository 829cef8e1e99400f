use serde::Serialize;

/// A named pricing profile mapping token categories to per-MTok rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    /// Opus-class models
    Primary,
    /// Sonnet-class models
    Mid,
    /// Haiku-class models
    Lightweight,
}

/// Rates in USD per 1,000,000 tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRates {
    pub input: f64,
    pub output: f64,
    pub cache_read: f64,
    pub cache_create: f64,
}

impl PricingTier {
    /// Map a model identifier to its tier by name substring.
    ///
    /// Anything the table does not recognize falls back to `Primary`; a
    /// deliberately conservative default, not an error.
    pub fn for_model(model: &str) -> Self {
        let model = model.to_lowercase();
        if model.contains("haiku") {
            PricingTier::Lightweight
        } else if model.contains("sonnet") {
            PricingTier::Mid
        } else {
            PricingTier::Primary
        }
    }

    pub fn rates(&self) -> TierRates {
        match self {
            PricingTier::Primary => TierRates {
                input: 15.0,
                output: 75.0,
                cache_read: 1.50,
                cache_create: 18.75,
            },
            PricingTier::Mid => TierRates {
                input: 3.0,
                output: 15.0,
                cache_read: 0.30,
                cache_create: 3.75,
            },
            PricingTier::Lightweight => TierRates {
                input: 0.25,
                output: 1.25,
                cache_read: 0.025,
                cache_create: 0.3125,
            },
        }
    }
}
