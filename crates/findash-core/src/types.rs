use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// The fixed vocabulary of financial ratios this engine produces.
///
/// Serialized keys use the camelCase names expected by the API layer
/// (`roe`, `currentRatio`, `assetTurnover`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ratio {
    CurrentRatio,
    QuickRatio,
    CashRatio,
    Roe,
    Roa,
    Npm,
    Gpm,
    Der,
    Dar,
    AssetTurnover,
    InventoryTurnover,
    Nim,
    Ldr,
    Car,
}

impl Ratio {
    /// Key used in flat JSON representations.
    pub fn as_key(&self) -> &'static str {
        match self {
            Ratio::CurrentRatio => "currentRatio",
            Ratio::QuickRatio => "quickRatio",
            Ratio::CashRatio => "cashRatio",
            Ratio::Roe => "roe",
            Ratio::Roa => "roa",
            Ratio::Npm => "npm",
            Ratio::Gpm => "gpm",
            Ratio::Der => "der",
            Ratio::Dar => "dar",
            Ratio::AssetTurnover => "assetTurnover",
            Ratio::InventoryTurnover => "inventoryTurnover",
            Ratio::Nim => "nim",
            Ratio::Ldr => "ldr",
            Ratio::Car => "car",
        }
    }

    /// Human-readable display name used in strengths/weaknesses labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ratio::CurrentRatio => "Current Ratio",
            Ratio::QuickRatio => "Quick Ratio",
            Ratio::CashRatio => "Cash Ratio",
            Ratio::Roe => "Return on Equity",
            Ratio::Roa => "Return on Assets",
            Ratio::Npm => "Net Profit Margin",
            Ratio::Gpm => "Gross Profit Margin",
            Ratio::Der => "Debt to Equity Ratio",
            Ratio::Dar => "Debt to Asset Ratio",
            Ratio::AssetTurnover => "Asset Turnover",
            Ratio::InventoryTurnover => "Inventory Turnover",
            Ratio::Nim => "Net Interest Margin",
            Ratio::Ldr => "Loan to Deposit Ratio",
            Ratio::Car => "Capital Adequacy Ratio",
        }
    }

    /// Polarity: `der` and `dar` improve downward, everything else upward.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Ratio::Der | Ratio::Dar)
    }
}

/// Sector-dependent formula and weight dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorCategory {
    /// Deposit-taking institutions (roe/roa/nim/ldr/car formula set).
    DepositInstitution,
    /// Everything else (liquidity/profitability/leverage/activity set).
    General,
}

impl SectorCategory {
    pub fn from_sector(sector: &str) -> Self {
        if sector == "Banking" {
            SectorCategory::DepositInstitution
        } else {
            SectorCategory::General
        }
    }
}

/// Raw statement record as delivered by a data provider: loosely keyed
/// line-item labels mapped to reported amounts, plus the reporting period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStatement {
    pub period: String,
    #[serde(flatten)]
    pub items: HashMap<String, f64>,
}

impl RawStatement {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            items: HashMap::new(),
        }
    }

    pub fn with_item(mut self, label: impl Into<String>, value: f64) -> Self {
        self.items.insert(label.into(), value);
        self
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.items.get(label).copied()
    }
}

/// One reporting period's normalized line items. Produced by the statement
/// normalizer; immutable once built. Absent inputs are zero here, never NaN.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSnapshot {
    pub period: String,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub inventory: f64,
    pub cash: f64,
    pub total_assets: f64,
    pub total_equity: f64,
    pub total_debt: f64,
    pub net_income: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    pub cost_of_revenue: f64,
}

/// Named ratio values for one reporting period.
///
/// Entries keep insertion order; downstream truncation policies depend on
/// first-seen order, so this is deliberately not a hash map. Keys never repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSet {
    pub period: String,
    values: Vec<(Ratio, f64)>,
}

impl RatioSet {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            values: Vec::new(),
        }
    }

    /// Insert or replace a ratio value.
    pub fn insert(&mut self, ratio: Ratio, value: f64) {
        if let Some(entry) = self.values.iter_mut().find(|(r, _)| *r == ratio) {
            entry.1 = value;
        } else {
            self.values.push((ratio, value));
        }
    }

    pub fn get(&self, ratio: Ratio) -> Option<f64> {
        self.values
            .iter()
            .find(|(r, _)| *r == ratio)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ratio, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for RatioSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("period", &self.period)?;
        map.serialize_entry("ratios", &RatioEntries(&self.values))?;
        map.end()
    }
}

/// Serializes a `(Ratio, f64)` slice as a flat JSON object in entry order.
struct RatioEntries<'a>(&'a [(Ratio, f64)]);

impl Serialize for RatioEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (ratio, value) in self.0 {
            map.serialize_entry(ratio.as_key(), value)?;
        }
        map.end()
    }
}

/// Per-ratio benchmark thresholds. Polarity is implied by the ratio identity
/// (see [`Ratio::lower_is_better`]), not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkBand {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

/// Qualitative classification of a scored ratio set. Each list holds at most
/// three entries, kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Company identity and sector classification from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub ticker: String,
    pub name: String,
    pub sector: String,
}

/// Sector-wide peer averages, one value per ratio that at least one peer
/// produced. Serialized flat, with the averaged ratios at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAverage {
    pub sector: String,
    pub total_companies_in_sector: usize,
    pub successful_calculations: usize,
    values: Vec<(Ratio, f64)>,
}

impl SectorAverage {
    pub fn new(
        sector: impl Into<String>,
        total_companies_in_sector: usize,
        successful_calculations: usize,
    ) -> Self {
        Self {
            sector: sector.into(),
            total_companies_in_sector,
            successful_calculations,
            values: Vec::new(),
        }
    }

    pub fn insert(&mut self, ratio: Ratio, value: f64) {
        if let Some(entry) = self.values.iter_mut().find(|(r, _)| *r == ratio) {
            entry.1 = value;
        } else {
            self.values.push((ratio, value));
        }
    }

    pub fn get(&self, ratio: Ratio) -> Option<f64> {
        self.values
            .iter()
            .find(|(r, _)| *r == ratio)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ratio, f64)> + '_ {
        self.values.iter().copied()
    }
}

impl Serialize for SectorAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.values.len()))?;
        map.serialize_entry("sector", &self.sector)?;
        map.serialize_entry("total_companies_in_sector", &self.total_companies_in_sector)?;
        map.serialize_entry("successful_calculations", &self.successful_calculations)?;
        for (ratio, value) in &self.values {
            map.serialize_entry(ratio.as_key(), value)?;
        }
        map.end()
    }
}
