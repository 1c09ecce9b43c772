use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res, config,
    error::Error,
    spotify::{CatalogApi, auth},
    types::{
        ArtistResponse, AudioAnalysisResponse, AudioFeatures, CategoriesResponse,
        CategoryPlaylistsResponse, PlaylistTracksResponse, Token,
    },
};

/// Authenticated Spotify Web API client.
///
/// Holds the session explicitly: one HTTP client and the access token
/// obtained for the run. Implements [`CatalogApi`] with one GET per
/// endpoint; every response is decoded into its typed record at this
/// boundary.
///
/// # Example
///
/// ```
/// let api = SpotifyClient::authenticate("client-id", "client-secret").await?;
/// let listing = api.get_playlists_for_category("toplists", "DE").await?;
/// ```
pub struct SpotifyClient {
    http: Client,
    token: Token,
}

impl SpotifyClient {
    /// Exchanges client credentials for a token and builds a client
    /// around it.
    ///
    /// A rejected exchange surfaces as [`Error::Auth`] before any
    /// extraction can start.
    pub async fn authenticate(client_id: &str, client_secret: &str) -> Res<Self> {
        let token = auth::request_token(client_id, client_secret).await?;
        Ok(Self::with_token(token))
    }

    /// Builds a client around an already-obtained token.
    pub fn with_token(token: Token) -> Self {
        SpotifyClient {
            http: Client::new(),
            token,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Issues an authorized GET and decodes the response at the
    /// boundary. Decode failures become `SchemaMismatch` naming the
    /// endpoint; status and network failures become `Transport`.
    async fn get_json<T: DeserializeOwned>(&self, url: String, endpoint: &str) -> Res<T> {
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?;

        match response.json::<T>().await {
            Ok(parsed) => Ok(parsed),
            Err(err) if err.is_decode() => Err(Error::SchemaMismatch {
                endpoint: endpoint.to_string(),
                detail: err.to_string(),
            }),
            Err(err) => Err(Error::Transport(err)),
        }
    }
}

impl CatalogApi for SpotifyClient {
    async fn get_categories(&self, market: &str) -> Res<CategoriesResponse> {
        let api_url = format!(
            "{uri}/browse/categories?country={market}",
            uri = &config::spotify_apiurl(),
            market = market
        );
        self.get_json(api_url, "browse/categories").await
    }

    async fn get_playlists_for_category(
        &self,
        category: &str,
        market: &str,
    ) -> Res<CategoryPlaylistsResponse> {
        let api_url = format!(
            "{uri}/browse/categories/{category}/playlists?country={market}",
            uri = &config::spotify_apiurl(),
            category = category,
            market = market
        );
        self.get_json(api_url, "browse/categories/playlists").await
    }

    async fn get_tracks(&self, playlist_id: &str) -> Res<PlaylistTracksResponse> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );
        self.get_json(api_url, "playlists/tracks").await
    }

    async fn get_audio_features(&self, track_id: &str) -> Res<AudioFeatures> {
        let api_url = format!(
            "{uri}/audio-features/{id}",
            uri = &config::spotify_apiurl(),
            id = track_id
        );
        self.get_json(api_url, "audio-features").await
    }

    async fn get_audio_analysis(&self, track_id: &str) -> Res<AudioAnalysisResponse> {
        let api_url = format!(
            "{uri}/audio-analysis/{id}",
            uri = &config::spotify_apiurl(),
            id = track_id
        );
        self.get_json(api_url, "audio-analysis").await
    }

    async fn get_artist(&self, artist_id: &str) -> Res<ArtistResponse> {
        let api_url = format!(
            "{uri}/artists/{id}",
            uri = &config::spotify_apiurl(),
            id = artist_id
        );
        self.get_json(api_url, "artists").await
    }
}
