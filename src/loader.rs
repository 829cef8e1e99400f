use crate::aggregate::aggregate;
use crate::classify::Classify;
use crate::error::{AnalyzerError, Result};
use crate::types::{LogRecord, SessionId, SessionSummary};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Parse JSONL content into records, preserving line order.
///
/// Lines are independent, so parsing runs in parallel; rayon's collect
/// keeps input order. A line that fails to parse is dropped silently,
/// which is the normal condition for non-record lines, not an error.
pub fn parse_records(contents: &str) -> Vec<LogRecord> {
    contents
        .par_lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

/// Read one session file into records. The only aborting failure is an
/// unreadable file.
pub fn load_session(path: &Path) -> Result<Vec<LogRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_records(&contents))
}

/// Load and summarize one session file end to end
pub fn analyze_session(path: &Path, classifier: &dyn Classify) -> Result<SessionSummary> {
    let records = load_session(path)?;
    let session_id = SessionId::new(
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default(),
    );
    Ok(aggregate(
        &records,
        session_id,
        &path.display().to_string(),
        classifier,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ModelNameHeuristic;
    use std::io::Write;

    #[test]
    fn test_malformed_lines_are_skipped() {
        let contents = r#"{"type":"user","message":{"content":"hi"}}
this line is not json
{"type":"assistant","requestId":"r1","message":{"model":"m","usage":{"input_tokens":1}}}
{"type":"system"}"#;
        let records = parse_records(contents);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = parse_records("\n\n{\"type\":\"user\"}\n   \n");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let contents: String = (0..50)
            .map(|i| format!("{{\"type\":\"user\",\"message\":{{\"content\":\"p{i}\"}}}}\n"))
            .collect();
        let records = parse_records(&contents);
        let summary = aggregate(&records, "s".into(), "f", &ModelNameHeuristic);
        let expected: Vec<String> = (0..50).map(|i| format!("p{i}")).collect();
        assert_eq!(summary.user_prompts, expected);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_session(Path::new("/nonexistent/session.jsonl")).unwrap_err();
        assert!(matches!(err, AnalyzerError::FileRead { .. }));
    }

    #[test]
    fn test_analyze_session_from_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".jsonl").unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","requestId":"r1","message":{{"model":"claude-3-opus-20240229","usage":{{"input_tokens":10,"output_tokens":2}}}}}}"#
        )
        .unwrap();
        writeln!(file, "not json").unwrap();
        file.flush().unwrap();

        let summary = analyze_session(file.path(), &ModelNameHeuristic).unwrap();
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.main_agent.tokens.input_tokens, 10);
    }
}
