use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token obtained via the client-credentials flow.
///
/// Held in memory only. Client-credentials tokens carry no refresh token;
/// a new one is requested from the configured secrets when this expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

/// One entry of a playlist. The track object is null for entries the API
/// can no longer resolve (removed or regionally unavailable tracks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub name: String,
    pub artists: Vec<ApiArtist>,
    pub album: ApiAlbum,
    pub duration_ms: u64,
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAlbum {
    pub name: String,
}

/// A flattened playlist track as shown in the table and written to CSV.
///
/// The serde renames double as the CSV header row; the tabled renames are
/// the table column headers. Both use the same display names in the same
/// fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct TrackRecord {
    #[serde(rename = "Song Name")]
    #[tabled(rename = "Song Name")]
    pub song_name: String,

    #[serde(rename = "Artist")]
    #[tabled(rename = "Artist")]
    pub artist: String,

    #[serde(rename = "Album")]
    #[tabled(rename = "Album")]
    pub album: String,

    #[serde(rename = "Duration (min)")]
    #[tabled(rename = "Duration (min)")]
    pub duration_min: f64,

    #[serde(rename = "Popularity")]
    #[tabled(rename = "Popularity")]
    pub popularity: u32,
}
