//! Chart extraction and normalization pipeline.
//!
//! - `locator` - finds the right Top 50 playlist per market
//! - `joiner` - joins per-track metadata from multiple endpoints
//! - `aggregate` - drives the per-market extraction loop
//! - `flatten` - reshapes nested charts into the flat table

mod aggregate;
mod flatten;
mod joiner;
mod locator;

pub use aggregate::extract;
pub use flatten::flatten;
pub use joiner::{enrich, enrich_all, tracks_for_playlist};
pub use locator::{TOPLISTS_CATEGORY, locate_for_market, locate_global};

use crate::{Res, spotify::CatalogApi, types::ChartTable, utils::Pacer};

/// Runs the whole pipeline: extract charts for the global market plus
/// `markets` in order, then flatten them into one table.
///
/// Equivalent to [`extract`] followed by [`flatten`]. Any failure on any
/// call aborts the run; there is no partial result.
pub async fn run(
    api: &impl CatalogApi,
    category: &str,
    markets: &[&str],
    pacer: &Pacer,
) -> Res<ChartTable> {
    let charts = extract(api, category, markets, pacer).await?;
    Ok(flatten(&charts))
}
