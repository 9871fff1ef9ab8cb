pub mod aggregator;
pub mod comparison;

pub use aggregator::{default_sector_average, PeerAggregator};
pub use comparison::{CompanyComparator, CompanyComparison, CompanyProfile};
