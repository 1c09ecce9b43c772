//! # Spotify Integration Module
//!
//! This module provides the authenticated HTTP boundary between the
//! extraction pipeline and the Spotify Web API. It owns all network
//! communication: the client-credentials token exchange and the
//! bearer-authorized GET requests against the catalog endpoints.
//!
//! ## Architecture
//!
//! ```text
//! Extraction Layer (locator, joiner, aggregate)
//!          ↓
//! CatalogApi trait (this module)
//!          ↓
//! SpotifyClient (reqwest, typed serde responses)
//!          ↓
//! Spotify Web API
//! ```
//!
//! The pipeline never touches HTTP directly; it is generic over
//! [`CatalogApi`], so tests drive it with an in-memory fake while
//! production uses [`SpotifyClient`].
//!
//! ## Boundary validation
//!
//! Every endpoint response deserializes into an explicit record from
//! [`crate::types`]. An absent expected field fails the decode and is
//! surfaced as [`crate::Error::SchemaMismatch`] naming the endpoint, so
//! schema problems are raised once at this edge instead of scattered
//! across the joining logic. No defaults are substituted.
//!
//! ## Error behavior
//!
//! - Token exchange rejection → [`crate::Error::Auth`], fatal before any
//!   extraction starts.
//! - Network and HTTP-status failures → [`crate::Error::Transport`],
//!   fatal with no automatic retry.
//!
//! ## API Coverage
//!
//! - `GET /browse/categories` - playlist categories for a market
//! - `GET /browse/categories/{id}/playlists` - candidate chart playlists
//! - `GET /playlists/{id}/tracks` - chart track listing
//! - `GET /audio-features/{id}` - per-track audio descriptors
//! - `GET /audio-analysis/{id}` - per-track structural analysis
//! - `GET /artists/{id}` - artist follower counts
//! - `POST /api/token` - client-credentials exchange

pub mod auth;
pub mod client;

pub use client::SpotifyClient;

use crate::{
    Res,
    types::{
        ArtistResponse, AudioAnalysisResponse, AudioFeatures, CategoriesResponse,
        CategoryPlaylistsResponse, PlaylistTracksResponse,
    },
};

/// The catalog API operations the extraction pipeline consumes.
///
/// Mirrors the Spotify Web API endpoints the pipeline needs, one method
/// per endpoint, each returning the typed, boundary-validated response
/// record.
#[allow(async_fn_in_trait)] // pipeline is single-task, no Send bound needed
pub trait CatalogApi {
    /// Lists playlist categories available in a market.
    async fn get_categories(&self, market: &str) -> Res<CategoriesResponse>;

    /// Lists the playlists filed under a category in a market's catalog
    /// view.
    async fn get_playlists_for_category(
        &self,
        category: &str,
        market: &str,
    ) -> Res<CategoryPlaylistsResponse>;

    /// Fetches a playlist's track listing in one call.
    async fn get_tracks(&self, playlist_id: &str) -> Res<PlaylistTracksResponse>;

    /// Fetches the ten audio descriptors for a track.
    async fn get_audio_features(&self, track_id: &str) -> Res<AudioFeatures>;

    /// Fetches the raw audio analysis payload for a track.
    async fn get_audio_analysis(&self, track_id: &str) -> Res<AudioAnalysisResponse>;

    /// Fetches an artist, including the follower count.
    async fn get_artist(&self, artist_id: &str) -> Res<ArtistResponse>;
}
