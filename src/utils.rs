use tabled::{
    Table,
    settings::{Alignment, Style, object::Segment},
};

use crate::{
    error::Error,
    types::{PlaylistItem, TrackRecord},
};

/// Extracts the playlist identifier from a share URL.
///
/// The identifier is the path segment after the final `/`, with any trailing
/// query string stripped. Inputs without a `/` pass through whole. No further
/// validation happens here; a bogus identifier fails at the API instead.
pub fn extract_playlist_id(input: &str) -> String {
    let segment = input.rsplit('/').next().unwrap_or(input);
    match segment.split_once('?') {
        Some((id, _)) => id.to_string(),
        None => segment.to_string(),
    }
}

/// Converts a track duration in milliseconds to minutes, rounded to two
/// decimal places.
pub fn duration_minutes(duration_ms: u64) -> f64 {
    (duration_ms as f64 / 60_000.0 * 100.0).round() / 100.0
}

/// Flattens raw playlist items into table records, preserving API order.
///
/// Only the first listed artist of each track is kept. An item whose track
/// object is null, or a track with an empty artist list, makes the whole
/// fetch fail; partial results are never produced.
pub fn flatten_tracks(items: &[PlaylistItem]) -> Result<Vec<TrackRecord>, Error> {
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let track = item
            .track
            .as_ref()
            .ok_or_else(|| Error::Api("playlist item has no track data".to_string()))?;

        let artist = track
            .artists
            .first()
            .ok_or_else(|| Error::Api(format!("track '{}' has no artists", track.name)))?;

        records.push(TrackRecord {
            song_name: track.name.clone(),
            artist: artist.name.clone(),
            album: track.album.name.clone(),
            duration_min: duration_minutes(track.duration_ms),
            popularity: track.popularity,
        });
    }

    Ok(records)
}

/// Counts tracks per artist and returns the `limit` most frequent ones.
///
/// Counting preserves first-encountered order, and the descending sort is
/// stable, so artists with equal counts keep their order of first appearance.
pub fn top_artists(records: &[TrackRecord], limit: usize) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for record in records {
        match counts.iter_mut().find(|(name, _)| *name == record.artist) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.artist.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Renders records as plain monospace text: one header row, one row per
/// record, space-padded columns with right-aligned cells.
pub fn render_table(records: &[TrackRecord]) -> String {
    let mut table = Table::new(records);
    table.with(Style::psql());
    table.modify(Segment::all(), Alignment::right());
    table.to_string()
}
