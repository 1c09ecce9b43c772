use crate::{
    Res,
    spotify::CatalogApi,
    types::{AnalysisSummary, EnrichedTrack, Track},
};

/// Fetches a playlist's track listing and joins artist follower counts.
///
/// The listing comes back in one call; the follower join then issues one
/// `get_artist` call per artist of every track, appending each
/// `followers.total` in the same order as the artist names. This fan-out
/// of `tracks × artists_per_track` calls is the dominant cost of the
/// pipeline.
///
/// A response missing an expected field fails the whole run at the
/// boundary; no default is substituted.
pub async fn tracks_for_playlist(api: &impl CatalogApi, playlist_id: &str) -> Res<Vec<Track>> {
    let listing = api.get_tracks(playlist_id).await?;

    let mut tracks = Vec::with_capacity(listing.items.len());
    for entry in listing.items {
        let item = entry.track;

        let mut followers = Vec::with_capacity(item.artists.len());
        for artist in &item.artists {
            let artist_data = api.get_artist(&artist.id).await?;
            followers.push(artist_data.followers.total);
        }

        tracks.push(Track {
            id: item.id,
            name: item.name,
            artists: item.artists.into_iter().map(|a| a.name).collect(),
            artists_followers: followers,
            album: item.album.name,
            release_date: item.album.release_date,
            popularity: item.popularity,
        });
    }

    Ok(tracks)
}

/// Attaches audio features and an audio analysis summary to one track.
///
/// Issues one `get_audio_features` and one `get_audio_analysis` call.
/// The section and segment counts are derived as the lengths of the raw
/// arrays in the analysis payload.
pub async fn enrich(api: &impl CatalogApi, track: Track) -> Res<EnrichedTrack> {
    let features = api.get_audio_features(&track.id).await?;
    let analysis = api.get_audio_analysis(&track.id).await?;

    let analysis = AnalysisSummary {
        end_of_fade_in: analysis.track.end_of_fade_in,
        start_of_fade_out: analysis.track.start_of_fade_out,
        sections_number: analysis.sections.len(),
        segments_number: analysis.segments.len(),
    };

    Ok(EnrichedTrack {
        track,
        features,
        analysis,
    })
}

/// Enriches every track of a chart, preserving chart order.
pub async fn enrich_all(api: &impl CatalogApi, tracks: Vec<Track>) -> Res<Vec<EnrichedTrack>> {
    let mut enriched = Vec::with_capacity(tracks.len());
    for track in tracks {
        enriched.push(enrich(api, track).await?);
    }
    Ok(enriched)
}
