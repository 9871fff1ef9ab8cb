pub mod roster;
pub mod trends;

pub use roster::{default_roster, sectors_summary, SectorMember, SectorSummary};
pub use trends::{project_trends, TrendPoint};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use findash_core::{
    AnalysisError, CompanyInfo, Insight, RatioProvider, RatioSet, RawStatement, SectorAverage,
    StatementProvider,
};
use health_scoring::{HealthScorer, InsightGenerator};
use peer_analysis::{CompanyComparator, CompanyComparison, PeerAggregator};
use ratio_analysis::RatioCalculator;
use serde::Serialize;
use std::sync::Arc;

/// Everything the API layer renders for one company, in one call.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub latest_period: String,
    pub ratios: RatioSet,
    pub trends: Vec<TrendPoint>,
    pub industry_average: SectorAverage,
    pub health_score: i32,
    pub analysis: Insight,
    pub last_updated: DateTime<Utc>,
}

/// Front door of the analysis core. Wires the normalizer/calculator, scorer,
/// insight generator and peer aggregator behind a statement provider and a
/// company roster, both supplied by the caller.
///
/// All computation is stateless; the only blocking call is the provider's
/// statement retrieval, and any timeout discipline belongs to the caller.
pub struct AnalysisEngine {
    provider: Arc<dyn StatementProvider>,
    roster: Vec<CompanyInfo>,
    calculator: RatioCalculator,
    scorer: HealthScorer,
    insights: InsightGenerator,
    aggregator: PeerAggregator,
    comparator: CompanyComparator,
}

impl AnalysisEngine {
    /// Engine over the built-in IDX roster.
    pub fn new(provider: Arc<dyn StatementProvider>) -> Self {
        Self::with_roster(provider, default_roster())
    }

    pub fn with_roster(provider: Arc<dyn StatementProvider>, roster: Vec<CompanyInfo>) -> Self {
        tracing::info!(companies = roster.len(), "analysis engine initialized");
        Self {
            provider,
            roster,
            calculator: RatioCalculator::new(),
            scorer: HealthScorer::new(),
            insights: InsightGenerator::new(),
            aggregator: PeerAggregator::new(),
            comparator: CompanyComparator::new(),
        }
    }

    pub fn companies(&self) -> &[CompanyInfo] {
        &self.roster
    }

    pub fn company_info(&self, ticker: &str) -> Result<&CompanyInfo, AnalysisError> {
        self.roster
            .iter()
            .find(|c| c.ticker == ticker)
            .ok_or_else(|| AnalysisError::UnknownCompany(ticker.to_string()))
    }

    /// Roster grouped by sector.
    pub fn sectors(&self) -> Vec<SectorSummary> {
        sectors_summary(&self.roster)
    }

    /// Normalize a raw statement and compute the sector's ratio set. Never
    /// fails; internal faults yield the documented default set.
    pub fn compute_ratios(&self, raw: &RawStatement, sector: &str) -> RatioSet {
        self.calculator.compute(raw, sector)
    }

    /// Weighted 0-100 health score for a ratio set.
    pub fn compute_health_score(&self, ratios: &RatioSet, sector: &str) -> i32 {
        self.scorer.score(ratios, sector)
    }

    /// Strengths, weaknesses and recommendations for a ratio set.
    pub fn compute_insights(&self, ratios: &RatioSet, sector: &str) -> Insight {
        self.insights.classify(ratios, sector)
    }

    /// Peer averages across the roster for one sector.
    pub async fn compute_sector_average(&self, sector: &str) -> SectorAverage {
        self.aggregator
            .sector_average(sector, &self.roster, self)
            .await
    }

    /// Detailed two-company comparison. Surfaces caller errors (unknown
    /// ticker, self-comparison) and provider failures.
    pub async fn compare(
        &self,
        ticker1: &str,
        ticker2: &str,
    ) -> Result<CompanyComparison, AnalysisError> {
        self.comparator
            .compare(ticker1, ticker2, &self.roster, self)
            .await
    }

    /// Deterministic quarterly projection for charting. An unknown ticker is
    /// surfaced; unavailable statement data degrades to an empty series.
    pub async fn trend_projection(
        &self,
        ticker: &str,
        periods: usize,
    ) -> Result<Vec<TrendPoint>, AnalysisError> {
        self.company_info(ticker)?;
        match self.ratios(ticker).await {
            Ok(base) => Ok(project_trends(&base, periods)),
            Err(e) => {
                tracing::warn!(ticker, error = %e, "no base ratios for trend projection");
                Ok(Vec::new())
            }
        }
    }

    /// Full per-company report: ratios, health score, insights, trend
    /// projection and the sector's peer average.
    pub async fn company_report(&self, ticker: &str) -> Result<CompanyReport, AnalysisError> {
        let info = self.company_info(ticker)?.clone();
        tracing::info!(ticker, sector = %info.sector, "building company report");

        let ratios = self.ratios(ticker).await?;
        let trends = project_trends(&ratios, 4);
        let industry_average = self.compute_sector_average(&info.sector).await;
        let health_score = self.scorer.score(&ratios, &info.sector);
        let analysis = self.insights.classify(&ratios, &info.sector);

        Ok(CompanyReport {
            ticker: info.ticker,
            name: info.name,
            sector: info.sector,
            latest_period: ratios.period.clone(),
            ratios,
            trends,
            industry_average,
            health_score,
            analysis,
            last_updated: Utc::now(),
        })
    }
}

#[async_trait]
impl RatioProvider for AnalysisEngine {
    /// Fetches the company's latest statement and computes its ratio set.
    /// Retrieval failures are surfaced here; the aggregation layer decides
    /// whether to skip or abort.
    async fn ratios(&self, ticker: &str) -> Result<RatioSet, AnalysisError> {
        let info = self.company_info(ticker)?;
        let raw = self.provider.fetch_statement(ticker).await?;
        Ok(self.calculator.compute(&raw, &info.sector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use findash_core::Ratio;
    use std::collections::HashMap;

    /// In-memory statement provider; tickers not listed fail retrieval.
    struct FakeStatements {
        statements: HashMap<String, RawStatement>,
    }

    impl FakeStatements {
        fn new(entries: Vec<(&str, RawStatement)>) -> Arc<Self> {
            Arc::new(Self {
                statements: entries
                    .into_iter()
                    .map(|(t, s)| (t.to_string(), s))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl StatementProvider for FakeStatements {
        async fn fetch_statement(&self, ticker: &str) -> Result<RawStatement, AnalysisError> {
            self.statements
                .get(ticker)
                .cloned()
                .ok_or_else(|| AnalysisError::DataUnavailable(ticker.to_string()))
        }
    }

    fn banking_statement() -> RawStatement {
        RawStatement::new("2024-Q1")
            .with_item("Total Stockholder Equity", 100.0)
            .with_item("Total Assets", 1000.0)
            .with_item("Net Income", 20.0)
            .with_item("Total Revenue", 60.0)
            .with_item("Current Assets", 500.0)
            .with_item("Current Liabilities", 400.0)
    }

    fn engine_with(entries: Vec<(&str, RawStatement)>) -> AnalysisEngine {
        AnalysisEngine::new(FakeStatements::new(entries))
    }

    #[tokio::test]
    async fn ratios_surface_unknown_ticker_and_retrieval_failure() {
        let engine = engine_with(vec![]);

        let unknown = engine.ratios("NOPE.JK").await;
        assert!(matches!(unknown, Err(AnalysisError::UnknownCompany(_))));

        let unavailable = engine.ratios("BBCA.JK").await;
        assert!(matches!(unavailable, Err(AnalysisError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn ratios_compute_per_roster_sector() {
        let engine = engine_with(vec![("BBCA.JK", banking_statement())]);

        let set = engine.ratios("BBCA.JK").await.unwrap();
        assert_relative_eq!(set.get(Ratio::Roe).unwrap(), 20.0);
        assert_relative_eq!(set.get(Ratio::Nim).unwrap(), 6.0);
        assert!(set.get(Ratio::CurrentRatio).is_none());
    }

    #[tokio::test]
    async fn company_report_composes_all_sections() {
        let engine = engine_with(vec![
            ("BBCA.JK", banking_statement()),
            ("BMRI.JK", banking_statement()),
        ]);

        let report = engine.company_report("BBCA.JK").await.unwrap();
        assert_eq!(report.name, "Bank Central Asia Tbk");
        assert_eq!(report.sector, "Banking");
        assert_eq!(report.latest_period, "2024-Q1");
        assert_eq!(report.trends.len(), 4);
        assert!((0..=100).contains(&report.health_score));
        assert_eq!(report.industry_average.sector, "Banking");
        // Two of the four banking peers delivered statements.
        assert_eq!(report.industry_average.total_companies_in_sector, 4);
        assert_eq!(report.industry_average.successful_calculations, 2);
    }

    #[tokio::test]
    async fn report_requires_statement_data() {
        let engine = engine_with(vec![]);
        let result = engine.company_report("BBCA.JK").await;
        assert!(matches!(result, Err(AnalysisError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn trend_projection_absorbs_missing_data_but_not_unknown_tickers() {
        let engine = engine_with(vec![]);

        let empty = engine.trend_projection("BBCA.JK", 4).await.unwrap();
        assert!(empty.is_empty());

        let unknown = engine.trend_projection("NOPE.JK", 4).await;
        assert!(matches!(unknown, Err(AnalysisError::UnknownCompany(_))));
    }

    #[tokio::test]
    async fn sector_average_uses_static_default_for_thin_sectors() {
        let engine = engine_with(vec![]);

        // Telecommunications has a single roster member.
        let average = engine.compute_sector_average("Telecommunications").await;
        assert_eq!(average.total_companies_in_sector, 2);
        assert_relative_eq!(average.get(Ratio::Roe).unwrap(), 16.8);
    }

    #[tokio::test]
    async fn compare_rejects_self_comparison() {
        let engine = engine_with(vec![("BBCA.JK", banking_statement())]);
        let result = engine.compare("BBCA.JK", "BBCA.JK").await;
        assert!(matches!(result, Err(AnalysisError::InvalidComparison(_))));
    }

    #[tokio::test]
    async fn compare_produces_winner_across_sectors() {
        let strong = banking_statement();
        let weak = RawStatement::new("2024-Q1")
            .with_item("Total Stockholder Equity", 100.0)
            .with_item("Total Assets", 1000.0)
            .with_item("Net Income", 1.0)
            .with_item("Total Revenue", 10.0)
            .with_item("Current Assets", 100.0)
            .with_item("Current Liabilities", 400.0);

        let engine = engine_with(vec![("BBCA.JK", strong), ("BMRI.JK", weak)]);
        let comparison = engine.compare("BBCA.JK", "BMRI.JK").await.unwrap();

        assert_eq!(comparison.winner, "BBCA.JK");
        assert!(comparison.health_score_difference > 0);
    }

    #[test]
    fn compute_entry_points_are_pure() {
        let engine = engine_with(vec![]);

        let set = engine.compute_ratios(&banking_statement(), "Banking");
        let score = engine.compute_health_score(&set, "Banking");
        let insight = engine.compute_insights(&set, "Banking");

        assert!((0..=100).contains(&score));
        assert!(!insight.recommendations.is_empty());

        let empty = RatioSet::new("2024-Q1");
        assert_eq!(engine.compute_health_score(&empty, "Banking"), 50);
        let empty_insight = engine.compute_insights(&empty, "Banking");
        assert!(empty_insight.strengths.is_empty());
        assert!(empty_insight.weaknesses.is_empty());
        assert!(empty_insight.recommendations.is_empty());
    }
}
