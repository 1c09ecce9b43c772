use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    Res, config,
    error::Error,
    types::{Token, TokenResponse},
};

/// Exchanges client credentials for an access token.
///
/// Performs the OAuth 2.0 client-credentials grant against the token
/// endpoint: the client id and secret are sent as a base64-encoded Basic
/// authorization header with `grant_type=client_credentials` in the form
/// body. The token is acquired once per run and reused; there is no
/// automatic refresh.
///
/// # Arguments
///
/// * `client_id` - ID of the registered API client
/// * `client_secret` - Secret of the registered API client
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token stamped with the time it was obtained
/// - `Err(Error::Auth)` - Exchange rejected or token body undecodable
/// - `Err(Error::Transport)` - Network failure reaching the endpoint
///
/// # Example
///
/// ```
/// let token = request_token("abc123", "def456").await?;
/// assert!(!token.is_expired());
/// ```
pub async fn request_token(client_id: &str, client_secret: &str) -> Res<Token> {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {credentials}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Auth(format!(
            "token endpoint returned {status}",
            status = response.status()
        )));
    }

    let granted = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::Auth(e.to_string()))?;

    Ok(Token {
        access_token: granted.access_token,
        token_type: granted.token_type,
        expires_in: granted.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
