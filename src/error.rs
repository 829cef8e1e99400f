use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    // IO-related errors
    #[error("Session not found: {identifier}")]
    SessionNotFound { identifier: String },

    #[error("No sessions found")]
    NoSessions,

    #[error("Claude data directory not found")]
    ClaudePathNotFound,

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access directory: {path}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Data processing errors
    #[error("Failed to serialize summary")]
    Serialize(#[from] serde_json::Error),

    // Async processing
    #[error("Task failed")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
