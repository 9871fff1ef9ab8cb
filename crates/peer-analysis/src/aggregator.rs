use findash_core::{CompanyInfo, Ratio, RatioProvider, RatioSet, SectorAverage};
use futures_util::stream::{self, StreamExt};
use std::collections::HashMap;

/// Default fan-out width for per-company ratio retrieval. Retrieval is an
/// external call of unknown latency, so sector sweeps are bounded, not serial.
const DEFAULT_CONCURRENCY: usize = 8;

/// Computes sector-wide peer averages across a company universe.
///
/// A sector with fewer than two members, or one where every retrieval fails,
/// resolves to a static default average. Individual retrieval failures are
/// skipped; ratios are averaged independently over the companies that
/// produced them.
#[derive(Debug, Clone, Copy)]
pub struct PeerAggregator {
    concurrency: usize,
}

impl Default for PeerAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerAggregator {
    pub fn new() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub async fn sector_average(
        &self,
        sector: &str,
        universe: &[CompanyInfo],
        provider: &dyn RatioProvider,
    ) -> SectorAverage {
        let peers: Vec<&CompanyInfo> = universe.iter().filter(|c| c.sector == sector).collect();
        let total = peers.len();

        if total < 2 {
            tracing::warn!(sector, total, "not enough companies for a meaningful average");
            return default_sector_average(sector);
        }

        tracing::info!(sector, total, "calculating sector average");

        let mut results: HashMap<String, RatioSet> = stream::iter(peers.iter())
            .map(|company| async move {
                (company.ticker.clone(), provider.ratios(&company.ticker).await)
            })
            .buffer_unordered(self.concurrency)
            .filter_map(|(ticker, result)| async move {
                match result {
                    Ok(set) if !set.is_empty() => Some((ticker, set)),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::warn!(ticker = %ticker, error = %e, "skipping peer, ratios unavailable");
                        None
                    }
                }
            })
            .collect()
            .await;

        let successful = results.len();

        // Accumulate in roster order so the averaged ratio order is stable
        // regardless of retrieval completion order.
        let mut sums: Vec<(Ratio, (f64, usize))> = Vec::new();
        for company in &peers {
            let Some(set) = results.remove(&company.ticker) else {
                continue;
            };
            for (ratio, value) in set.iter() {
                if let Some(entry) = sums.iter_mut().find(|(r, _)| *r == ratio) {
                    entry.1 .0 += value;
                    entry.1 .1 += 1;
                } else {
                    sums.push((ratio, (value, 1)));
                }
            }
        }

        if sums.is_empty() {
            tracing::warn!(sector, "no peer produced ratios, using defaults");
            return default_sector_average(sector);
        }

        let mut average = SectorAverage::new(sector, total, successful);
        for (ratio, (sum, count)) in sums {
            average.insert(ratio, sum / count as f64);
        }

        tracing::info!(sector, successful, "sector average calculated");
        average
    }
}

/// Static fallback averages used when a sector cannot be computed from data.
pub fn default_sector_average(sector: &str) -> SectorAverage {
    let mut average;
    match sector {
        "Banking" => {
            average = SectorAverage::new(sector, 4, 0);
            average.insert(Ratio::Roe, 16.5);
            average.insert(Ratio::Roa, 2.2);
            average.insert(Ratio::Nim, 5.8);
            average.insert(Ratio::Ldr, 87.0);
            average.insert(Ratio::Car, 19.2);
        }
        "Telecommunications" => {
            average = SectorAverage::new(sector, 2, 0);
            average.insert(Ratio::CurrentRatio, 1.3);
            average.insert(Ratio::Roe, 16.8);
            average.insert(Ratio::Roa, 7.5);
            average.insert(Ratio::Der, 0.65);
            average.insert(Ratio::AssetTurnover, 0.55);
        }
        "Consumer Goods" => {
            average = SectorAverage::new(sector, 3, 0);
            average.insert(Ratio::CurrentRatio, 1.6);
            average.insert(Ratio::Roe, 22.3);
            average.insert(Ratio::Roa, 11.2);
            average.insert(Ratio::Der, 0.52);
            average.insert(Ratio::InventoryTurnover, 6.8);
        }
        _ => {
            average = SectorAverage::new(sector, 1, 0);
            average.insert(Ratio::CurrentRatio, 1.4);
            average.insert(Ratio::Roe, 15.0);
            average.insert(Ratio::Roa, 8.0);
            average.insert(Ratio::Der, 0.6);
            average.insert(Ratio::AssetTurnover, 0.8);
        }
    }
    average
}
