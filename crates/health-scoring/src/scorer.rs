use crate::BenchmarkTable;
use findash_core::{BenchmarkBand, Ratio, RatioSet, SectorCategory};

/// Per-ratio weights for the overall health score. Weights are percentages of
/// the full score; the effective denominator is the sum of weights actually
/// applied, so missing ratios shrink the base instead of dragging the score.
const BANKING_WEIGHTS: &[(Ratio, u32)] = &[
    (Ratio::Roe, 30),
    (Ratio::Roa, 25),
    (Ratio::Nim, 20),
    (Ratio::Ldr, 15),
    (Ratio::Car, 10),
];

const GENERAL_WEIGHTS: &[(Ratio, u32)] = &[
    (Ratio::CurrentRatio, 20),
    (Ratio::Roe, 25),
    (Ratio::Roa, 20),
    (Ratio::Der, 20),
    (Ratio::AssetTurnover, 15),
];

pub fn score_weights(category: SectorCategory) -> &'static [(Ratio, u32)] {
    match category {
        SectorCategory::DepositInstitution => BANKING_WEIGHTS,
        SectorCategory::General => GENERAL_WEIGHTS,
    }
}

/// Sub-score for one ratio against its benchmark band: 100/75/50/25 for
/// excellent/good/fair/poor, with the comparison direction flipped for
/// lower-is-better ratios.
pub fn ratio_subscore(value: f64, band: &BenchmarkBand, ratio: Ratio) -> f64 {
    if ratio.lower_is_better() {
        if value <= band.excellent {
            100.0
        } else if value <= band.good {
            75.0
        } else if value <= band.fair {
            50.0
        } else {
            25.0
        }
    } else if value >= band.excellent {
        100.0
    } else if value >= band.good {
        75.0
    } else if value >= band.fair {
        50.0
    } else {
        25.0
    }
}

/// Aggregates weighted per-ratio sub-scores into one 0-100 health score.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthScorer;

impl HealthScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a ratio set against its sector's benchmarks. An empty set scores
    /// a neutral 50; the result is always clamped to [0, 100].
    pub fn score(&self, ratios: &RatioSet, sector: &str) -> i32 {
        if ratios.is_empty() {
            tracing::debug!(sector, "empty ratio set, returning neutral score");
            return 50;
        }

        let weights = score_weights(SectorCategory::from_sector(sector));
        let benchmarks = BenchmarkTable::lookup(sector);

        let mut weighted_sum = 0.0;
        let mut weight_total = 0u32;

        for &(ratio, weight) in weights {
            let value = match ratios.get(ratio) {
                Some(v) => v,
                None => continue,
            };
            let band = match benchmarks.iter().find(|(r, _)| *r == ratio) {
                Some((_, b)) => b,
                None => continue,
            };
            weighted_sum += ratio_subscore(value, band, ratio) * (weight as f64 / 100.0);
            weight_total += weight;
        }

        let score = if weight_total > 0 {
            (weighted_sum / weight_total as f64 * 100.0).round() as i32
        } else {
            50
        };
        let score = score.clamp(0, 100);

        tracing::debug!(sector, score, "calculated health score");
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banking_set() -> RatioSet {
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Roe, 20.0); // excellent -> 100
        set.insert(Ratio::Roa, 2.0); // good -> 75
        set.insert(Ratio::Nim, 6.0); // excellent -> 100
        set.insert(Ratio::Ldr, 125.0); // excellent -> 100
        set.insert(Ratio::Car, 10.0); // below fair -> 25
        set
    }

    #[test]
    fn empty_set_scores_neutral_fifty() {
        assert_eq!(HealthScorer::new().score(&RatioSet::new("2024-Q1"), "Banking"), 50);
        assert_eq!(HealthScorer::new().score(&RatioSet::new("2024-Q1"), "Retail"), 50);
    }

    #[test]
    fn banking_weighted_aggregate() {
        // 100*0.30 + 75*0.25 + 100*0.20 + 100*0.15 + 25*0.10 = 86.25 over
        // weight total 100 -> 86.
        assert_eq!(HealthScorer::new().score(&banking_set(), "Banking"), 86);
    }

    #[test]
    fn missing_ratios_shrink_the_denominator() {
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::Roe, 20.0); // excellent -> 100, weight 30
        set.insert(Ratio::Roa, 2.0); // good -> 75, weight 25

        // (100*0.30 + 75*0.25) / 55 * 100 = 88.63... -> 89
        assert_eq!(HealthScorer::new().score(&set, "Banking"), 89);
    }

    #[test]
    fn score_is_always_within_bounds() {
        let mut worst = RatioSet::new("2024-Q1");
        let mut best = RatioSet::new("2024-Q1");
        for &(ratio, _) in score_weights(SectorCategory::General) {
            worst.insert(ratio, if ratio.lower_is_better() { 1e9 } else { -1e9 });
            best.insert(ratio, if ratio.lower_is_better() { -1e9 } else { 1e9 });
        }

        let scorer = HealthScorer::new();
        assert_eq!(scorer.score(&worst, "Retail"), 25);
        assert_eq!(scorer.score(&best, "Retail"), 100);
        for set in [&worst, &best] {
            let score = scorer.score(set, "Retail");
            assert!((0..=100).contains(&score));
        }
    }

    #[test]
    fn ratios_without_benchmark_coverage_score_neutral() {
        // Banking weight scheme against a set holding only general-sector
        // ratios: nothing overlaps, so the neutral default applies.
        let mut set = RatioSet::new("2024-Q1");
        set.insert(Ratio::CurrentRatio, 2.0);
        assert_eq!(HealthScorer::new().score(&set, "Banking"), 50);
    }

    #[test]
    fn lower_is_better_band_comparisons() {
        let band = BenchmarkBand {
            excellent: 0.5,
            good: 0.7,
            fair: 1.0,
        };
        assert_eq!(ratio_subscore(0.3, &band, Ratio::Der), 100.0);
        assert_eq!(ratio_subscore(0.5, &band, Ratio::Der), 100.0);
        assert_eq!(ratio_subscore(0.6, &band, Ratio::Der), 75.0);
        assert_eq!(ratio_subscore(0.9, &band, Ratio::Der), 50.0);
        assert_eq!(ratio_subscore(1.2, &band, Ratio::Der), 25.0);
    }

    #[test]
    fn der_subscore_never_decreases_as_value_decreases() {
        let band = BenchmarkBand {
            excellent: 0.5,
            good: 0.7,
            fair: 1.0,
        };
        let mut last = 0.0;
        for step in (0..=30).rev() {
            let value = step as f64 * 0.1;
            let score = ratio_subscore(value, &band, Ratio::Der);
            assert!(score >= last, "subscore dropped at value {value}");
            last = score;
        }
    }

    #[test]
    fn higher_is_better_band_comparisons() {
        let band = BenchmarkBand {
            excellent: 20.0,
            good: 15.0,
            fair: 10.0,
        };
        assert_eq!(ratio_subscore(25.0, &band, Ratio::Roe), 100.0);
        assert_eq!(ratio_subscore(15.0, &band, Ratio::Roe), 75.0);
        assert_eq!(ratio_subscore(10.0, &band, Ratio::Roe), 50.0);
        assert_eq!(ratio_subscore(9.9, &band, Ratio::Roe), 25.0);
    }
}
