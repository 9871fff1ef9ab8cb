use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Ticker is not present in the company roster. Caller error, always surfaced.
    #[error("Unknown company: {0}")]
    UnknownCompany(String),

    /// Malformed comparison request (e.g. a company against itself). Always surfaced.
    #[error("Invalid comparison: {0}")]
    InvalidComparison(String),

    /// The statement provider could not deliver data for a company.
    /// Surfaced by comparison and report paths, absorbed everywhere else.
    #[error("Financial data unavailable for {0}")]
    DataUnavailable(String),

    /// Internal computation fault. Never crosses the crate boundary: converted
    /// to documented default values at the calculation adapter.
    #[error("Calculation error: {0}")]
    Calculation(String),
}
