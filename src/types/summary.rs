use super::cost::CostBreakdown;
use super::ids::SessionId;
use super::pricing::PricingTier;
use super::usage::TokenTotals;
use crate::reconcile::ReconciledCall;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reconciled token totals and call count for one cost category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub api_calls: usize,
    #[serde(flatten)]
    pub tokens: TokenTotals,
}

impl CategoryTotals {
    pub fn record(&mut self, call: &ReconciledCall) {
        self.api_calls += 1;
        self.tokens.add(&call.tokens);
    }

    pub fn cost(&self, tier: PricingTier) -> CostBreakdown {
        CostBreakdown::for_tokens(&self.tokens, tier)
    }
}

/// Aggregate over all reconciled calls in one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub file_path: String,
    /// Lines that parsed as records; malformed lines are not counted
    pub entry_count: usize,
    pub main_agent: CategoryTotals,
    pub hooks: CategoryTotals,
    /// Reconciled calls per distinct model string (BTreeMap keeps the
    /// serialized summary deterministic across runs)
    pub calls_by_model: BTreeMap<String, usize>,
    pub user_prompts: Vec<String>,
    pub tool_uses: Vec<String>,
    pub thinking_blocks: usize,
}

impl SessionSummary {
    /// Main-agent cost at the primary tier
    pub fn main_agent_cost(&self) -> CostBreakdown {
        self.main_agent.cost(PricingTier::Primary)
    }

    /// Hook cost at the lightweight tier
    pub fn hook_cost(&self) -> CostBreakdown {
        self.hooks.cost(PricingTier::Lightweight)
    }

    /// Combined token totals across both categories
    pub fn combined_tokens(&self) -> TokenTotals {
        let mut totals = self.main_agent.tokens;
        totals.add(&self.hooks.tokens);
        totals
    }

    /// Tool invocations tallied by name, most used first
    pub fn tool_use_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for name in &self.tool_uses {
            *counts.entry(name.as_str()).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}
