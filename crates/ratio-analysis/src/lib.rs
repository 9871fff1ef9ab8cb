pub mod calculator;
pub mod normalizer;

pub use calculator::{default_ratio_set, RatioCalculator};
pub use normalizer::StatementNormalizer;
