//! Configuration management for the playlist analyzer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials for the Spotify API
//! (client id and client secret) are the only required values; the API
//! endpoint URLs have sensible defaults and exist as overrides mainly for
//! testing against a stand-in server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Built-in endpoint defaults

use std::{env, path::PathBuf};

use crate::error::Error;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from the application's `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `playlens/.env` first, then falls back to a `.env` in the current
/// working directory. Missing files are not an error; the credentials are
/// re-checked at fetch time, so startup never fails over configuration.
///
/// # Directory Structure
///
/// The primary `.env` location is:
/// - Linux: `~/.local/share/playlens/.env`
/// - macOS: `~/Library/Application Support/playlens/.env`
/// - Windows: `%LOCALAPPDATA%/playlens/.env`
///
/// # Errors
///
/// Returns an error only if an existing `.env` file cannot be parsed.
pub fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlens/.env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    // dotenv() errors when no .env exists in the cwd, which is fine here
    let _ = dotenv::dotenv();
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable, which contains the
/// client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Errors
///
/// Returns [`Error::Api`] if the variable is not set. The absence of
/// credentials is a fetch-time failure, never a startup crash.
pub fn spotify_client_id() -> Result<String, Error> {
    env::var("SPOTIFY_CLIENT_ID")
        .map_err(|_| Error::Api("SPOTIFY_CLIENT_ID is not set".to_string()))
}

/// Returns the Spotify API client secret for authentication.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable. The secret should
/// be kept confidential and never exposed in logs or version control.
///
/// # Errors
///
/// Returns [`Error::Api`] if the variable is not set.
pub fn spotify_client_secret() -> Result<String, Error> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .map_err(|_| Error::Api("SPOTIFY_CLIENT_SECRET is not set".to_string()))
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to the
/// public `https://api.spotify.com/v1` endpoint when unset.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, falling back to
/// the public `https://accounts.spotify.com/api/token` endpoint when unset.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}
