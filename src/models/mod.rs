pub mod metrics;
pub mod record;

pub use metrics::ProviderMetrics;
pub use record::{EvalResults, GradingResult, Provider, Response, ResultRecord, TokenUsage};
