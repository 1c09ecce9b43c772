use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Market key for the worldwide chart.
pub const GLOBAL_MARKET: &str = "GLOBAL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Acquired once per run; callers re-authenticate when this turns true.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoriesPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesPage {
    pub items: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPlaylistsResponse {
    pub playlists: PlaylistsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsPage {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub name: String,
    // the catalog serves null descriptions on some items
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub track: PlaylistTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub artists: Vec<TrackArtist>,
    pub album: AlbumSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub name: String,
    // granularity varies: year, year-month or full date
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistResponse {
    pub followers: Followers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub duration_ms: u64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub tempo: f64,
    pub valence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAnalysisResponse {
    pub track: AnalysisTrack,
    pub sections: Vec<serde_json::Value>,
    pub segments: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisTrack {
    pub end_of_fade_in: f64,
    pub start_of_fade_out: f64,
}

/// Summary of an audio analysis payload. The section and segment counts
/// are derived from the raw arrays, not read as fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub end_of_fade_in: f64,
    pub start_of_fade_out: f64,
    pub sections_number: usize,
    pub segments_number: usize,
}

/// One chart entry before enrichment.
///
/// Invariant: `artists_followers` is parallel to `artists` (same length,
/// same order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub artists_followers: Vec<u64>,
    pub album: String,
    pub release_date: String,
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedTrack {
    pub track: Track,
    pub features: AudioFeatures,
    pub analysis: AnalysisSummary,
}

/// An ordered chart for one market; order is chart rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketChart {
    pub market: String,
    pub tracks: Vec<EnrichedTrack>,
}

/// Column-oriented flat table, one row per (market, track) pair.
///
/// Every column has the same length and columns are aligned by row
/// index. Rows are appended in market order, chart order within a
/// market; nothing is sorted, filtered or deduplicated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartTable {
    pub market: Vec<String>,
    pub rank: Vec<u32>,
    pub name: Vec<String>,
    pub artists: Vec<Vec<String>>,
    pub artists_followers: Vec<Vec<u64>>,
    pub id: Vec<String>,
    pub album: Vec<String>,
    pub release_date: Vec<String>,
    pub popularity: Vec<u32>,
    pub acousticness: Vec<f64>,
    pub danceability: Vec<f64>,
    pub duration_ms: Vec<u64>,
    pub energy: Vec<f64>,
    pub instrumentalness: Vec<f64>,
    pub liveness: Vec<f64>,
    pub loudness: Vec<f64>,
    pub speechiness: Vec<f64>,
    pub tempo: Vec<f64>,
    pub valence: Vec<f64>,
    pub end_of_fade_in: Vec<f64>,
    pub start_of_fade_out: Vec<f64>,
    pub sections_number: Vec<usize>,
    pub segments_number: Vec<usize>,
}

impl ChartTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows. All columns share this length.
    pub fn len(&self) -> usize {
        self.market.len()
    }

    pub fn is_empty(&self) -> bool {
        self.market.is_empty()
    }

    pub(crate) fn push(&mut self, market: &str, rank: u32, entry: &EnrichedTrack) {
        self.market.push(market.to_string());
        self.rank.push(rank);
        self.name.push(entry.track.name.clone());
        self.artists.push(entry.track.artists.clone());
        self.artists_followers.push(entry.track.artists_followers.clone());
        self.id.push(entry.track.id.clone());
        self.album.push(entry.track.album.clone());
        self.release_date.push(entry.track.release_date.clone());
        self.popularity.push(entry.track.popularity);
        self.acousticness.push(entry.features.acousticness);
        self.danceability.push(entry.features.danceability);
        self.duration_ms.push(entry.features.duration_ms);
        self.energy.push(entry.features.energy);
        self.instrumentalness.push(entry.features.instrumentalness);
        self.liveness.push(entry.features.liveness);
        self.loudness.push(entry.features.loudness);
        self.speechiness.push(entry.features.speechiness);
        self.tempo.push(entry.features.tempo);
        self.valence.push(entry.features.valence);
        self.end_of_fade_in.push(entry.analysis.end_of_fade_in);
        self.start_of_fade_out.push(entry.analysis.start_of_fade_out);
        self.sections_number.push(entry.analysis.sections_number);
        self.segments_number.push(entry.analysis.segments_number);
    }

    /// Preview rows for display with `tabled::Table::new`.
    pub fn table_rows(&self) -> Vec<ChartRow> {
        (0..self.len())
            .map(|row| ChartRow {
                market: self.market[row].clone(),
                rank: self.rank[row],
                name: self.name[row].clone(),
                artists: utils::join_names(&self.artists[row]),
                album: self.album[row].clone(),
                popularity: self.popularity[row],
            })
            .collect()
    }
}

#[derive(Tabled)]
pub struct ChartRow {
    pub market: String,
    pub rank: u32,
    pub name: String,
    pub artists: String,
    pub album: String,
    pub popularity: u32,
}
