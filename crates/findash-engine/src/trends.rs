use chrono::{Datelike, Duration, Utc};
use findash_core::{Ratio, RatioSet};
use serde::Serialize;

/// One point of the deterministic quarterly projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: String,
    pub value: f64,
}

/// Projects a headline value backwards over recent quarters from the latest
/// ratio set. This is a fixed-slope projection for charting, not a forecast:
/// each step back applies a 2% variation to the current ratio.
///
/// Sets without a current ratio (the banking formula set) fall back to a
/// tenth of the return on equity, and that series is flat: the variation
/// factor applies to the current-ratio branch only.
pub fn project_trends(base: &RatioSet, periods: usize) -> Vec<TrendPoint> {
    if base.is_empty() {
        return Vec::new();
    }

    let now = Utc::now();
    let mut points: Vec<TrendPoint> = (0..periods)
        .map(|i| {
            let date = now - Duration::days(90 * i as i64);
            let value = match base.get(Ratio::CurrentRatio) {
                Some(current_ratio) => current_ratio * (1.0 + i as f64 * 0.02),
                None => base.get(Ratio::Roe).unwrap_or(0.0) / 10.0,
            };
            TrendPoint {
                period: format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
                value: round2(value),
            }
        })
        .collect();

    // Chronological order, oldest first.
    points.reverse();
    points
}

/// Two-decimal rounding, ties away from zero (`f64::round`). Tie-breaking
/// differs from round-half-to-even renderers, which matters only for values
/// landing exactly on a half cent.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
