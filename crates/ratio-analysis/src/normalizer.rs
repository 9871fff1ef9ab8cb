use findash_core::{RawStatement, SectorCategory, StatementSnapshot};

/// Alias chains for each line item, in lookup priority order. Upstream feeds
/// label the same item differently across companies and statement vintages.
const EQUITY_LABELS: &[&str] = &["Total Stockholder Equity", "Stockholders Equity"];
/// Deposit institutions report revenue under either label; the general-sector
/// formula set reads "Total Revenue" only.
const BANKING_REVENUE_LABELS: &[&str] = &["Total Revenue", "Operating Revenue"];
const GENERAL_REVENUE_LABELS: &[&str] = &["Total Revenue"];
const CASH_LABELS: &[&str] = &["Cash And Cash Equivalents", "Cash"];
const DEBT_LABELS: &[&str] = &["Total Debt"];
const CURRENT_ASSETS_LABELS: &[&str] = &["Current Assets"];
const CURRENT_LIABILITIES_LABELS: &[&str] = &["Current Liabilities"];
const INVENTORY_LABELS: &[&str] = &["Inventory"];
const TOTAL_ASSETS_LABELS: &[&str] = &["Total Assets"];
const NET_INCOME_LABELS: &[&str] = &["Net Income"];
const GROSS_PROFIT_LABELS: &[&str] = &["Gross Profit"];
const COST_OF_REVENUE_LABELS: &[&str] = &["Cost Of Revenue"];

/// Extracts the fixed line-item vocabulary from a loosely-keyed raw statement.
///
/// Every item the ratio formulas consume is populated; anything the statement
/// does not carry under any known label defaults to zero. Normalization never
/// fails. The sector category decides the revenue alias chain; all other
/// items resolve the same way for both formula sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementNormalizer;

impl StatementNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: &RawStatement, category: SectorCategory) -> StatementSnapshot {
        let revenue_labels = match category {
            SectorCategory::DepositInstitution => BANKING_REVENUE_LABELS,
            SectorCategory::General => GENERAL_REVENUE_LABELS,
        };
        StatementSnapshot {
            period: raw.period.clone(),
            current_assets: item(raw, CURRENT_ASSETS_LABELS),
            current_liabilities: item(raw, CURRENT_LIABILITIES_LABELS),
            inventory: item(raw, INVENTORY_LABELS),
            cash: item(raw, CASH_LABELS),
            total_assets: item(raw, TOTAL_ASSETS_LABELS),
            total_equity: item(raw, EQUITY_LABELS),
            total_debt: item(raw, DEBT_LABELS),
            net_income: item(raw, NET_INCOME_LABELS),
            revenue: item(raw, revenue_labels),
            gross_profit: item(raw, GROSS_PROFIT_LABELS),
            cost_of_revenue: item(raw, COST_OF_REVENUE_LABELS),
        }
    }
}

fn item(raw: &RawStatement, labels: &[&str]) -> f64 {
    labels
        .iter()
        .find_map(|label| raw.get(label))
        .unwrap_or(0.0)
}
