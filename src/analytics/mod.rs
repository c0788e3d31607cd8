pub mod engine;
pub mod gauge;
pub mod messages;
pub mod parse;
pub mod reference;
pub mod review;
pub mod risk;
pub mod trends;
pub mod types;

pub use engine::{DefaultHealthAnalytics, HealthAnalytics};
pub use risk::compute_health_summary;
pub use trends::compute_trends;
pub use types::{AnalysisOutcome, AnalyticsError, BiomarkerTrend, HealthSummary, RiskLevel, Trend};
