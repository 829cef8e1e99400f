use crate::classify::{CallCategory, Classify};
use crate::constants::PROMPT_PREVIEW_LEN;
use crate::reconcile::Reconciler;
use crate::types::{
    CategoryTotals, ContentBlock, LogRecord, MessageContent, RecordKind, SessionId, SessionSummary,
};
use std::collections::BTreeMap;

/// Fold a session's records into one summary.
///
/// Assistant usage snapshots run through the reconciler, then each
/// reconciled call bills to the category the classifier assigns its model.
pub fn aggregate(
    records: &[LogRecord],
    session_id: SessionId,
    file_path: &str,
    classifier: &dyn Classify,
) -> SessionSummary {
    let mut reconciler = Reconciler::new();
    let mut user_prompts = Vec::new();
    let mut tool_uses = Vec::new();
    let mut thinking_blocks = 0;

    for record in records {
        match record.kind {
            RecordKind::User => {
                if let Some(message) = &record.message
                    && let Some(MessageContent::Text(content)) = &message.content
                    && !content.is_empty()
                {
                    user_prompts.push(content.chars().take(PROMPT_PREVIEW_LEN).collect());
                }
            }
            RecordKind::Assistant => {
                let Some(message) = &record.message else {
                    continue;
                };

                if let Some(usage) = message.usage {
                    let model = message.model.as_deref().unwrap_or("unknown");
                    reconciler.observe(record.request_id.clone(), model, usage);
                }

                if let Some(MessageContent::Blocks(blocks)) = &message.content {
                    for block in blocks {
                        match block {
                            ContentBlock::Thinking => thinking_blocks += 1,
                            ContentBlock::ToolUse { name } => {
                                tool_uses.push(name.clone().unwrap_or_else(|| "unknown".into()));
                            }
                            ContentBlock::Other => {}
                        }
                    }
                }
            }
            RecordKind::Other => {}
        }
    }

    let mut main_agent = CategoryTotals::default();
    let mut hooks = CategoryTotals::default();
    let mut calls_by_model: BTreeMap<String, usize> = BTreeMap::new();

    for call in reconciler.calls() {
        *calls_by_model.entry(call.model.clone()).or_default() += 1;
        match classifier.classify(&call.model) {
            CallCategory::Lightweight => hooks.record(call),
            CallCategory::Primary => main_agent.record(call),
        }
    }

    SessionSummary {
        session_id,
        file_path: file_path.to_string(),
        entry_count: records.len(),
        main_agent,
        hooks,
        calls_by_model,
        user_prompts,
        tool_uses,
        thinking_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{MockClassify, ModelNameHeuristic};
    use crate::loader::parse_records;

    const SESSION: &str = r#"{"type":"user","message":{"content":"first prompt"}}
{"type":"assistant","requestId":"req_main","message":{"model":"claude-3-opus-20240229","usage":{"input_tokens":100,"output_tokens":10},"content":[{"type":"thinking","thinking":"..."},{"type":"tool_use","name":"Read","input":{}}]}}
{"type":"assistant","requestId":"req_main","message":{"model":"claude-3-opus-20240229","usage":{"input_tokens":100,"output_tokens":40,"cache_read_input_tokens":500},"content":[{"type":"tool_use","name":"Read","input":{}}]}}
{"type":"assistant","requestId":"req_hook","message":{"model":"claude-3-5-haiku-20241022","usage":{"input_tokens":20,"output_tokens":5}}}
{"type":"user","message":{"content":[{"type":"tool_result","content":"ok"}]}}
{"type":"system","subtype":"init"}"#;

    fn summarize(log: &str) -> SessionSummary {
        let records = parse_records(log);
        aggregate(&records, "test-session".into(), "test.jsonl", &ModelNameHeuristic)
    }

    #[test]
    fn test_category_split() {
        let summary = summarize(SESSION);

        assert_eq!(summary.main_agent.api_calls, 1);
        assert_eq!(summary.main_agent.tokens.input_tokens, 100);
        // max across the two streamed snapshots, not the sum
        assert_eq!(summary.main_agent.tokens.output_tokens, 40);
        assert_eq!(summary.main_agent.tokens.cache_read_tokens, 500);

        assert_eq!(summary.hooks.api_calls, 1);
        assert_eq!(summary.hooks.tokens.input_tokens, 20);
        assert_eq!(summary.hooks.tokens.output_tokens, 5);
    }

    #[test]
    fn test_session_facts() {
        let summary = summarize(SESSION);

        assert_eq!(summary.entry_count, 6);
        // Only string-content user messages count as prompts
        assert_eq!(summary.user_prompts, vec!["first prompt"]);
        assert_eq!(summary.thinking_blocks, 1);
        // Re-emitted snapshots repeat their content blocks as written
        assert_eq!(summary.tool_uses, vec!["Read", "Read"]);
        assert_eq!(summary.calls_by_model.len(), 2);
        assert_eq!(summary.calls_by_model["claude-3-opus-20240229"], 1);
    }

    #[test]
    fn test_prompt_preview_truncation() {
        let long = "x".repeat(500);
        let log = format!(r#"{{"type":"user","message":{{"content":"{long}"}}}}"#);
        let summary = summarize(&log);
        assert_eq!(summary.user_prompts[0].chars().count(), PROMPT_PREVIEW_LEN);
    }

    #[test]
    fn test_idempotent_over_same_records() {
        let records = parse_records(SESSION);
        let a = aggregate(&records, "s".into(), "f", &ModelNameHeuristic);
        let b = aggregate(&records, "s".into(), "f", &ModelNameHeuristic);
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_classifier_decides_categories() {
        let mut classifier = MockClassify::new();
        classifier
            .expect_classify()
            .returning(|_| crate::classify::CallCategory::Lightweight);

        let records = parse_records(SESSION);
        let summary = aggregate(&records, "s".into(), "f", &classifier);
        assert_eq!(summary.main_agent.api_calls, 0);
        assert_eq!(summary.hooks.api_calls, 2);
    }

    #[test]
    fn test_combined_tokens_span_both_categories() {
        let summary = summarize(SESSION);
        let combined = summary.combined_tokens();
        assert_eq!(combined.input_tokens, 100 + 20);
        assert_eq!(combined.output_tokens, 40 + 5);
        assert_eq!(combined.cache_read_tokens, 500);
        // Input context folds fresh input plus both cache categories
        assert_eq!(combined.total_input_context(), 120 + 500);
    }

    #[test]
    fn test_assistant_without_usage_still_counts_blocks() {
        let log = r#"{"type":"assistant","requestId":"r1","message":{"model":"claude-3-opus-20240229","content":[{"type":"thinking","thinking":"..."}]}}"#;
        let summary = summarize(log);
        assert_eq!(summary.thinking_blocks, 1);
        assert_eq!(summary.main_agent.api_calls, 0);
    }
}
