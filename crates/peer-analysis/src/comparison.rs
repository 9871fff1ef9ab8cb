use findash_core::{AnalysisError, CompanyInfo, Insight, RatioProvider, RatioSet};
use health_scoring::{HealthScorer, InsightGenerator};
use serde::Serialize;

/// One side of a detailed comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub ratios: RatioSet,
    pub health_score: i32,
    pub analysis: Insight,
}

/// Head-to-head comparison of two companies by health score.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyComparison {
    pub company1: CompanyProfile,
    pub company2: CompanyProfile,
    pub winner: String,
    pub health_score_difference: i32,
}

/// Builds detailed two-company comparisons.
///
/// Unlike the scoring pipeline, this path surfaces failures: comparing a
/// company with itself or naming an unknown ticker is a caller error, and a
/// provider failure for either side aborts the comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyComparator {
    scorer: HealthScorer,
    insights: InsightGenerator,
}

impl CompanyComparator {
    pub fn new() -> Self {
        Self {
            scorer: HealthScorer::new(),
            insights: InsightGenerator::new(),
        }
    }

    pub async fn compare(
        &self,
        ticker1: &str,
        ticker2: &str,
        universe: &[CompanyInfo],
        provider: &dyn RatioProvider,
    ) -> Result<CompanyComparison, AnalysisError> {
        if ticker1 == ticker2 {
            return Err(AnalysisError::InvalidComparison(
                "cannot compare a company with itself".to_string(),
            ));
        }

        tracing::info!(ticker1, ticker2, "performing detailed comparison");

        let company1 = self.profile(ticker1, universe, provider).await?;
        let company2 = self.profile(ticker2, universe, provider).await?;

        // Strict greater-than: a tie goes to the second company.
        let winner = if company1.health_score > company2.health_score {
            company1.ticker.clone()
        } else {
            company2.ticker.clone()
        };
        let health_score_difference = (company1.health_score - company2.health_score).abs();

        tracing::info!(
            ticker1,
            score1 = company1.health_score,
            ticker2,
            score2 = company2.health_score,
            "detailed comparison completed"
        );

        Ok(CompanyComparison {
            company1,
            company2,
            winner,
            health_score_difference,
        })
    }

    async fn profile(
        &self,
        ticker: &str,
        universe: &[CompanyInfo],
        provider: &dyn RatioProvider,
    ) -> Result<CompanyProfile, AnalysisError> {
        let info = universe
            .iter()
            .find(|c| c.ticker == ticker)
            .ok_or_else(|| AnalysisError::UnknownCompany(ticker.to_string()))?;

        let ratios = provider.ratios(ticker).await?;
        let health_score = self.scorer.score(&ratios, &info.sector);
        let analysis = self.insights.classify(&ratios, &info.sector);

        Ok(CompanyProfile {
            ticker: info.ticker.clone(),
            name: info.name.clone(),
            sector: info.sector.clone(),
            ratios,
            health_score,
            analysis,
        })
    }
}
