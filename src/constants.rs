/// How many characters of each user prompt are kept as a preview
/// in the session summary (arrival order is preserved)
pub const PROMPT_PREVIEW_LEN: usize = 200;

/// Pricing rates are quoted per million tokens
pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;
