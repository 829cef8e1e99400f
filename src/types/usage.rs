use serde::{Deserialize, Serialize};

/// The four token counters a usage snapshot reports.
///
/// Snapshots are cumulative, not incremental: the transport re-emits a
/// growing total for the same request as the call streams. Field names
/// mirror the transcript's `usage` object so this doubles as the wire type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenTotals {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(rename = "cache_creation_input_tokens", default)]
    pub cache_creation_tokens: u64,
    #[serde(rename = "cache_read_input_tokens", default)]
    pub cache_read_tokens: u64,
}

impl TokenTotals {
    /// Fold a cumulative snapshot into this total, keeping the
    /// component-wise maximum. Returns the positive delta per counter;
    /// a counter reporting less than previously seen contributes zero
    /// (never subtract).
    pub fn fold_max(&mut self, snapshot: &TokenTotals) -> TokenTotals {
        let delta = TokenTotals {
            input_tokens: snapshot.input_tokens.saturating_sub(self.input_tokens),
            output_tokens: snapshot.output_tokens.saturating_sub(self.output_tokens),
            cache_creation_tokens: snapshot
                .cache_creation_tokens
                .saturating_sub(self.cache_creation_tokens),
            cache_read_tokens: snapshot
                .cache_read_tokens
                .saturating_sub(self.cache_read_tokens),
        };
        self.input_tokens = self.input_tokens.max(snapshot.input_tokens);
        self.output_tokens = self.output_tokens.max(snapshot.output_tokens);
        self.cache_creation_tokens = self.cache_creation_tokens.max(snapshot.cache_creation_tokens);
        self.cache_read_tokens = self.cache_read_tokens.max(snapshot.cache_read_tokens);
        delta
    }

    /// Add another total counter-by-counter
    pub fn add(&mut self, other: &TokenTotals) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.cache_creation_tokens += other.cache_creation_tokens;
        self.cache_read_tokens += other.cache_read_tokens;
    }

    /// Everything the model read: fresh input plus both cache categories
    pub fn total_input_context(&self) -> u64 {
        self.input_tokens + self.cache_creation_tokens + self.cache_read_tokens
    }
}
