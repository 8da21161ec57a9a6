use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, error::Error, types::Token};

// Request a fresh token this many seconds before the current one expires.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Holds the client-credentials access token for the session.
///
/// The token lives in memory only: it expires within the hour and can always
/// be re-derived from the configured secrets, so nothing is written to disk.
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    /// Returns a valid access token, requesting a new one when none is held
    /// or the held one is about to expire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the credentials are missing from the
    /// environment or the token exchange fails.
    pub async fn get_valid_token(&mut self) -> Result<String, Error> {
        match &self.token {
            Some(token) if !is_expired(token) => Ok(token.access_token.clone()),
            _ => {
                let token = request_client_token().await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}

fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now >= token.obtained_at + token.expires_in.saturating_sub(EXPIRY_BUFFER_SECS)
}

/// Exchanges the configured client id and secret for an access token.
///
/// Posts `grant_type=client_credentials` to the token endpoint with HTTP
/// basic authentication, as specified for the OAuth 2.0 client-credentials
/// grant.
async fn request_client_token() -> Result<Token, Error> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .basic_auth(&client_id, Some(&client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| Error::Api("malformed token response".to_string()))?
        .to_string();

    Ok(Token {
        access_token,
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
