use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    extract::{joiner, locator},
    info,
    spotify::CatalogApi,
    success,
    types::{GLOBAL_MARKET, MarketChart},
    utils::Pacer,
};

/// Extracts the global chart plus one chart per market, in order.
///
/// The global chart is resolved first and stored under `"GLOBAL"`; each
/// market from `markets` follows in the given order. After every
/// per-market pass the `pacer` pauses before the next one, a fixed
/// self-imposed throttle. Each resolved chart's display name is printed
/// so operators can follow a long-running batch.
///
/// Any failure on any call aborts the run: a half-extracted result is
/// never returned.
pub async fn extract(
    api: &impl CatalogApi,
    category: &str,
    markets: &[&str],
    pacer: &Pacer,
) -> Res<Vec<MarketChart>> {
    let pb = ProgressBar::new((markets.len() + 1) as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = drive(api, category, markets, pacer, &pb).await;
    pb.finish_and_clear();

    if let Ok(charts) = &result {
        success!("Data extracted for {} markets.", charts.len());
    }
    result
}

async fn drive(
    api: &impl CatalogApi,
    category: &str,
    markets: &[&str],
    pacer: &Pacer,
    pb: &ProgressBar,
) -> Res<Vec<MarketChart>> {
    let mut charts = Vec::with_capacity(markets.len() + 1);

    let global = locator::locate_global(api, category).await?;
    info!("{}", global.name);
    pb.set_message(format!("Fetching {name}...", name = global.name));

    let tracks = joiner::tracks_for_playlist(api, &global.id).await?;
    let tracks = joiner::enrich_all(api, tracks).await?;
    charts.push(MarketChart {
        market: GLOBAL_MARKET.to_string(),
        tracks,
    });
    pb.inc(1);

    for market in markets {
        let chart = locator::locate_for_market(api, category, market).await?;
        info!("{}", chart.name);
        pb.set_message(format!("Fetching {name}...", name = chart.name));

        let tracks = joiner::tracks_for_playlist(api, &chart.id).await?;
        let tracks = joiner::enrich_all(api, tracks).await?;
        charts.push(MarketChart {
            market: (*market).to_string(),
            tracks,
        });
        pb.inc(1);

        pacer.pause().await;
    }

    Ok(charts)
}
