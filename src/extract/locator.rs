use crate::{
    Res,
    error::Error,
    spotify::CatalogApi,
    types::{GLOBAL_MARKET, PlaylistItem, PlaylistRef},
};

/// Category id the Top 50 charts are filed under.
pub const TOPLISTS_CATEGORY: &str = "toplists";

/// Market whose catalog view lists the worldwide chart.
const GLOBAL_LOOKUP_MARKET: &str = "PL";

/// Chart names all carry this fragment.
const CHART_NAME_MARKER: &str = "Top 50";

/// What the catalog calls "World" in the global lookup market's locale.
const GLOBAL_NAME_MARKER: &str = "Świat";

/// Per-market chart descriptions carry this phrase.
const MARKET_DESCRIPTION_MARKER: &str = "most played tracks";

/// Charts whose descriptions collide with the per-market phrasing.
const EXCLUDED_DESCRIPTION_MARKERS: [&str; 2] = ["Global", "USA"];

/// Locates the worldwide Top 50 chart.
///
/// The global chart is only listed under a specific market's catalog
/// view, so the lookup goes through that market and matches the chart
/// name against the localized "World" token. Substring matching against
/// catalog naming is inherently brittle; if the catalog renames its
/// charts this is the place to adjust.
///
/// # Returns
///
/// The first matching playlist in the order the API returned, or
/// [`Error::LookupMiss`] when nothing matches. Absence is a hard failure
/// because a missing chart corrupts downstream rank numbering.
pub async fn locate_global(api: &impl CatalogApi, category: &str) -> Res<PlaylistRef> {
    let listing = api
        .get_playlists_for_category(category, GLOBAL_LOOKUP_MARKET)
        .await?;

    listing
        .playlists
        .items
        .into_iter()
        .find(|item| {
            item.name.contains(CHART_NAME_MARKER) && item.name.contains(GLOBAL_NAME_MARKER)
        })
        .map(playlist_ref)
        .ok_or_else(|| Error::LookupMiss {
            category: category.to_string(),
            market: GLOBAL_MARKET.to_string(),
        })
}

/// Locates the Top 50 chart for one market.
///
/// Matches on the playlist description rather than the name, which is
/// localized per market. The global and USA charts share the description
/// phrasing and are excluded explicitly.
///
/// # Returns
///
/// The first matching playlist in the order the API returned, or
/// [`Error::LookupMiss`] when nothing matches.
pub async fn locate_for_market(
    api: &impl CatalogApi,
    category: &str,
    market: &str,
) -> Res<PlaylistRef> {
    let listing = api.get_playlists_for_category(category, market).await?;

    listing
        .playlists
        .items
        .into_iter()
        .find(|item| {
            item.description.as_deref().is_some_and(|description| {
                description.contains(MARKET_DESCRIPTION_MARKER)
                    && EXCLUDED_DESCRIPTION_MARKERS
                        .iter()
                        .all(|marker| !description.contains(marker))
            })
        })
        .map(playlist_ref)
        .ok_or_else(|| Error::LookupMiss {
            category: category.to_string(),
            market: market.to_string(),
        })
}

fn playlist_ref(item: PlaylistItem) -> PlaylistRef {
    PlaylistRef {
        name: item.name,
        id: item.id,
    }
}
