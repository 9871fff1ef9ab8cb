pub mod benchmarks;
pub mod insights;
pub mod scorer;

pub use benchmarks::BenchmarkTable;
pub use insights::InsightGenerator;
pub use scorer::{ratio_subscore, HealthScorer};
