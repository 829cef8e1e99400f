use super::ids::RequestId;
use super::usage::TokenTotals;
use serde::Deserialize;

/// One parsed transcript line.
///
/// Only `user` and `assistant` records carry anything we read; every other
/// `type` deserializes to `RecordKind::Other` and is skipped downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    #[serde(rename = "requestId", default)]
    pub request_id: Option<RequestId>,
    #[serde(default)]
    pub message: Option<MessageBody>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    User,
    Assistant,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<TokenTotals>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content is either a plain string (user prompts) or an ordered
/// list of typed blocks (assistant turns).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Thinking,
    ToolUse {
        #[serde(default)]
        name: Option<String>,
    },
    #[serde(other)]
    Other,
}
