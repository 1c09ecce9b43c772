use crate::types::{ChartTable, MarketChart};

/// Flattens nested per-market charts into one column-oriented table.
///
/// Pure function, no I/O. Markets are visited in slice order, tracks in
/// chart order; rank restarts at 1 for every market, independent of any
/// global numbering. One value is appended to every column per track, so
/// all columns end with identical length equal to the total track count
/// across all markets. Nothing is sorted, filtered or deduplicated: the
/// input order is authoritative.
pub fn flatten(charts: &[MarketChart]) -> ChartTable {
    let mut table = ChartTable::new();

    for chart in charts {
        for (position, entry) in chart.tracks.iter().enumerate() {
            let rank = (position + 1) as u32;
            table.push(&chart.market, rank, entry);
        }
    }

    table
}
