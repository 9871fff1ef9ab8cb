use crate::{AnalysisError, RatioSet, RawStatement};
use async_trait::async_trait;

/// Source of raw financial statements. Implementations wrap whatever upstream
/// feed is in use; the call may be slow or fail, and the core imposes no
/// timeout of its own.
#[async_trait]
pub trait StatementProvider: Send + Sync {
    async fn fetch_statement(&self, ticker: &str) -> Result<RawStatement, AnalysisError>;
}

/// Source of per-company ratio sets. The peer aggregator and comparator only
/// depend on this, keeping them decoupled from statement retrieval.
#[async_trait]
pub trait RatioProvider: Send + Sync {
    async fn ratios(&self, ticker: &str) -> Result<RatioSet, AnalysisError>;
}
