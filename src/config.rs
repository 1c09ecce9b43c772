//! Configuration for the Spotify Web API endpoints.
//!
//! Endpoints default to the public Spotify URLs and can be overridden
//! through environment variables, which is how the tests and any
//! self-hosted proxy point the client elsewhere. No configuration files
//! are read.

use std::env;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable and falls back to
/// the public endpoint.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable and falls back
/// to the public endpoint. Used once per run for the client-credentials
/// grant.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}
