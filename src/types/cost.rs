use crate::constants::TOKENS_PER_MILLION;
use crate::types::{PricingTier, TokenTotals};
use serde::Serialize;

/// Dollar estimate for one category's token totals under one tier.
///
/// Pure derivation from its two inputs; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub cache_read_cost: f64,
    pub cache_create_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    pub fn for_tokens(tokens: &TokenTotals, tier: PricingTier) -> Self {
        let rates = tier.rates();
        let input_cost = tokens.input_tokens as f64 * rates.input / TOKENS_PER_MILLION;
        let output_cost = tokens.output_tokens as f64 * rates.output / TOKENS_PER_MILLION;
        let cache_read_cost =
            tokens.cache_read_tokens as f64 * rates.cache_read / TOKENS_PER_MILLION;
        let cache_create_cost =
            tokens.cache_creation_tokens as f64 * rates.cache_create / TOKENS_PER_MILLION;

        CostBreakdown {
            input_cost,
            output_cost,
            cache_read_cost,
            cache_create_cost,
            total_cost: input_cost + output_cost + cache_read_cost + cache_create_cost,
        }
    }
}
