use crate::{ratio_subscore, BenchmarkTable};
use findash_core::{Insight, RatioSet};

const MAX_ENTRIES: usize = 3;

const GENERIC_RECOMMENDATIONS: [&str; 3] = [
    "Maintain current performance levels",
    "Monitor industry trends",
    "Focus on operational efficiency",
];

/// Classifies each benchmarked ratio as a strength or weakness and derives
/// recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    /// A sub-score of at least 75 reads as a strength; at most 40 as a
    /// weakness with a paired recommendation. Ratios the sector's benchmark
    /// table does not cover are skipped.
    pub fn classify(&self, ratios: &RatioSet, sector: &str) -> Insight {
        let mut insight = Insight::default();
        if ratios.is_empty() {
            return insight;
        }

        for (ratio, value) in ratios.iter() {
            let band = match BenchmarkTable::band(sector, ratio) {
                Some(b) => b,
                None => continue,
            };
            let score = ratio_subscore(value, &band, ratio);
            let display = ratio.display_name();

            if score >= 75.0 {
                insight.strengths.push(format!("Strong {display}"));
            } else if score <= 40.0 {
                insight.weaknesses.push(format!("Weak {display}"));
                insight.recommendations.push(format!("Improve {display}"));
            }
        }

        // Lists keep the first three entries in ratio discovery order, not the
        // three most extreme sub-scores.
        // TODO: confirm whether rank-based top-3 selection was intended here.
        insight.strengths.truncate(MAX_ENTRIES);
        insight.weaknesses.truncate(MAX_ENTRIES);
        insight.recommendations.truncate(MAX_ENTRIES);

        if insight.recommendations.is_empty() {
            insight.recommendations = GENERIC_RECOMMENDATIONS
                .iter()
                .map(|s| s.to_string())
                .collect();
        }

        insight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findash_core::Ratio;

    #[test]
    fn empty_ratio_set_yields_three_empty_lists() {
        let insight = InsightGenerator::new().classify(&RatioSet::new("2024-Q1"), "Banking");
        assert!(insight.strengths.is_empty());
        assert!(insight.weaknesses.is_empty());
        assert!(insight.recommendations.is_empty());
    }

    #[test]
    fn strengths_and_weaknesses_use_display_names() {
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Roe, 25.0); // excellent vs default bands
        set.insert(Ratio::Der, 2.0); // far above fair, lower-is-better

        let insight = InsightGenerator::new().classify(&set, "Retail");
        assert_eq!(insight.strengths, vec!["Strong Return on Equity"]);
        assert_eq!(insight.weaknesses, vec!["Weak Debt to Equity Ratio"]);
        assert_eq!(insight.recommendations, vec!["Improve Debt to Equity Ratio"]);
    }

    #[test]
    fn generic_recommendations_when_no_weaknesses() {
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Roe, 25.0);

        let insight = InsightGenerator::new().classify(&set, "Retail");
        assert!(insight.weaknesses.is_empty());
        assert_eq!(
            insight.recommendations,
            vec![
                "Maintain current performance levels",
                "Monitor industry trends",
                "Focus on operational efficiency",
            ]
        );
    }

    #[test]
    fn truncation_keeps_first_three_in_discovery_order() {
        // Four strengths against default benchmarks; the fourth discovered
        // must be dropped even though it scores as high as the others.
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::AssetTurnover, 5.0);
        set.insert(Ratio::CurrentRatio, 3.0);
        set.insert(Ratio::Roe, 30.0);
        set.insert(Ratio::Roa, 20.0);
        set.insert(Ratio::Der, 0.1);

        let insight = InsightGenerator::new().classify(&set, "Retail");
        assert_eq!(
            insight.strengths,
            vec![
                "Strong Asset Turnover",
                "Strong Current Ratio",
                "Strong Return on Equity",
            ]
        );
    }

    #[test]
    fn unbenchmarked_ratios_are_skipped() {
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Nim, 10.0); // no band outside Banking
        set.insert(Ratio::Roe, 30.0);

        let insight = InsightGenerator::new().classify(&set, "Retail");
        assert_eq!(insight.strengths, vec!["Strong Return on Equity"]);
    }

    #[test]
    fn mid_band_ratios_are_neither_strength_nor_weakness() {
        // Fair sub-score of 50 falls between the thresholds.
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Roe, 11.0); // fair vs default bands

        let insight = InsightGenerator::new().classify(&set, "Retail");
        assert!(insight.strengths.is_empty());
        assert!(insight.weaknesses.is_empty());
    }
}
