use findash_core::{BenchmarkBand, Ratio};

/// Static sector-keyed benchmark bands, calibrated for IDX-listed companies.
/// Process-wide constants; safe for unsynchronized concurrent reads.
pub struct BenchmarkTable;

const fn band(excellent: f64, good: f64, fair: f64) -> BenchmarkBand {
    BenchmarkBand {
        excellent,
        good,
        fair,
    }
}

const BANKING: &[(Ratio, BenchmarkBand)] = &[
    (Ratio::Roe, band(20.0, 15.0, 10.0)),
    (Ratio::Roa, band(3.0, 2.0, 1.0)),
    (Ratio::Nim, band(6.0, 5.0, 4.0)),
    (Ratio::Ldr, band(90.0, 85.0, 80.0)),
    (Ratio::Car, band(20.0, 18.0, 15.0)),
];

const TELECOMMUNICATIONS: &[(Ratio, BenchmarkBand)] = &[
    (Ratio::CurrentRatio, band(1.5, 1.2, 1.0)),
    (Ratio::Roe, band(20.0, 15.0, 10.0)),
    (Ratio::Roa, band(12.0, 8.0, 5.0)),
    (Ratio::Der, band(0.5, 0.7, 1.0)),
    (Ratio::AssetTurnover, band(0.8, 0.6, 0.4)),
];

const CONSUMER_GOODS: &[(Ratio, BenchmarkBand)] = &[
    (Ratio::CurrentRatio, band(2.0, 1.5, 1.2)),
    (Ratio::Roe, band(25.0, 18.0, 12.0)),
    (Ratio::Roa, band(15.0, 10.0, 6.0)),
    (Ratio::Der, band(0.4, 0.6, 0.8)),
    (Ratio::InventoryTurnover, band(8.0, 6.0, 4.0)),
];

const AUTOMOTIVE: &[(Ratio, BenchmarkBand)] = &[
    (Ratio::CurrentRatio, band(1.8, 1.4, 1.1)),
    (Ratio::Roe, band(18.0, 12.0, 8.0)),
    (Ratio::Roa, band(10.0, 6.0, 3.0)),
    (Ratio::Der, band(0.6, 0.8, 1.2)),
    (Ratio::AssetTurnover, band(1.5, 1.2, 0.8)),
];

const DEFAULT: &[(Ratio, BenchmarkBand)] = &[
    (Ratio::CurrentRatio, band(1.8, 1.3, 1.0)),
    (Ratio::Roe, band(20.0, 15.0, 10.0)),
    (Ratio::Roa, band(10.0, 6.0, 3.0)),
    (Ratio::Der, band(0.5, 0.7, 1.0)),
    (Ratio::AssetTurnover, band(1.2, 0.8, 0.5)),
];

impl BenchmarkTable {
    /// Bands for a sector; sectors without an explicit table resolve to the
    /// default one.
    pub fn lookup(sector: &str) -> &'static [(Ratio, BenchmarkBand)] {
        match sector {
            "Banking" => BANKING,
            "Telecommunications" => TELECOMMUNICATIONS,
            "Consumer Goods" => CONSUMER_GOODS,
            "Automotive" => AUTOMOTIVE,
            _ => DEFAULT,
        }
    }

    /// Band for one ratio within a sector, if the sector's table defines it.
    pub fn band(sector: &str, ratio: Ratio) -> Option<BenchmarkBand> {
        Self::lookup(sector)
            .iter()
            .find(|(r, _)| *r == ratio)
            .map(|(_, b)| *b)
    }
}
