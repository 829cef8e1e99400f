pub mod cost;
pub mod ids;
pub mod pricing;
pub mod record;
pub mod summary;
pub mod usage;

pub use cost::CostBreakdown;
pub use ids::{RequestId, SessionId};
pub use pricing::{PricingTier, TierRates};
pub use record::{ContentBlock, LogRecord, MessageBody, MessageContent, RecordKind};
pub use summary::{CategoryTotals, SessionSummary};
pub use usage::TokenTotals;
