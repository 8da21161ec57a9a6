use reqwest::Client;

use crate::{
    config,
    error::Error,
    types::{PlaylistItem, PlaylistTracksResponse},
};

/// Retrieves all track items of a playlist from the Spotify Web API.
///
/// The endpoint pages at 100 items; this follows the `next` links the API
/// hands back until the playlist is exhausted, so the returned vector holds
/// the complete playlist in response order.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - The playlist identifier extracted from the share URL
///
/// # Errors
///
/// A request is a single attempt. Network failures, error statuses (404 for
/// an unknown identifier, 401 for a bad token, 429 for rate limiting) and
/// bodies that don't deserialize all propagate as [`Error::Api`] with the
/// underlying message attached.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>, Error> {
    let mut items = Vec::new();
    let mut api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<PlaylistTracksResponse>().await?;
        items.extend(page.items);

        match page.next {
            Some(next) => api_url = next,
            None => break,
        }
    }

    Ok(items)
}
