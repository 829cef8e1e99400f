use crate::types::SessionSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Unchanged,
}

impl Direction {
    pub fn of(diff: i64) -> Self {
        match diff {
            d if d > 0 => Direction::Increase,
            d if d < 0 => Direction::Decrease,
            _ => Direction::Unchanged,
        }
    }
}

/// One numeric field compared between two summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDiff {
    pub label: &'static str,
    pub baseline: u64,
    pub test: u64,
    pub diff: i64,
    pub direction: Direction,
}

impl MetricDiff {
    fn new(label: &'static str, baseline: u64, test: u64) -> Self {
        let diff = test as i64 - baseline as i64;
        Self {
            label,
            baseline,
            test,
            diff,
            direction: Direction::of(diff),
        }
    }
}

/// Structured field-by-field diff of two session summaries.
///
/// Carries no formatting; the report layer renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryComparison {
    pub metrics: Vec<MetricDiff>,
    /// Baseline main-agent cost at the primary tier
    pub baseline_cost: f64,
    /// Test main-agent cost at the primary tier
    pub test_cost: f64,
    /// Test hook cost at the lightweight tier
    pub hook_cost: f64,
    /// What running with hooks cost on top of the baseline:
    /// `test_cost - baseline_cost + hook_cost`
    pub overhead: f64,
}

pub fn compare(baseline: &SessionSummary, test: &SessionSummary) -> SummaryComparison {
    let metrics = vec![
        MetricDiff::new(
            "User prompts",
            baseline.user_prompts.len() as u64,
            test.user_prompts.len() as u64,
        ),
        MetricDiff::new(
            "Tool uses",
            baseline.tool_uses.len() as u64,
            test.tool_uses.len() as u64,
        ),
        MetricDiff::new(
            "API calls (main)",
            baseline.main_agent.api_calls as u64,
            test.main_agent.api_calls as u64,
        ),
        MetricDiff::new(
            "Input tokens",
            baseline.main_agent.tokens.input_tokens,
            test.main_agent.tokens.input_tokens,
        ),
        MetricDiff::new(
            "Output tokens",
            baseline.main_agent.tokens.output_tokens,
            test.main_agent.tokens.output_tokens,
        ),
        MetricDiff::new(
            "Cache creation",
            baseline.main_agent.tokens.cache_creation_tokens,
            test.main_agent.tokens.cache_creation_tokens,
        ),
        MetricDiff::new(
            "Cache read",
            baseline.main_agent.tokens.cache_read_tokens,
            test.main_agent.tokens.cache_read_tokens,
        ),
        MetricDiff::new(
            "Hook calls",
            baseline.hooks.api_calls as u64,
            test.hooks.api_calls as u64,
        ),
        MetricDiff::new(
            "Hook input tokens",
            baseline.hooks.tokens.input_tokens,
            test.hooks.tokens.input_tokens,
        ),
        MetricDiff::new(
            "Hook output tokens",
            baseline.hooks.tokens.output_tokens,
            test.hooks.tokens.output_tokens,
        ),
    ];

    let baseline_cost = baseline.main_agent_cost().total_cost;
    let test_cost = test.main_agent_cost().total_cost;
    let hook_cost = test.hook_cost().total_cost;

    SummaryComparison {
        metrics,
        baseline_cost,
        test_cost,
        hook_cost,
        overhead: test_cost - baseline_cost + hook_cost,
    }
}
