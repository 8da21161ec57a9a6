use playlens::error::Error;
use playlens::types::{ApiAlbum, ApiArtist, ApiTrack, PlaylistItem, TrackRecord};
use playlens::utils::*;

// Helper function to create a playlist item with a single artist
fn create_test_item(name: &str, artist: &str, album: &str, duration_ms: u64) -> PlaylistItem {
    PlaylistItem {
        track: Some(ApiTrack {
            name: name.to_string(),
            artists: vec![ApiArtist {
                name: artist.to_string(),
            }],
            album: ApiAlbum {
                name: album.to_string(),
            },
            duration_ms,
            popularity: 50,
        }),
    }
}

// Helper function to create a flat record with the given artist
fn create_test_record(artist: &str) -> TrackRecord {
    TrackRecord {
        song_name: format!("{}'s song", artist),
        artist: artist.to_string(),
        album: "Album".to_string(),
        duration_min: 3.0,
        popularity: 10,
    }
}

#[test]
fn test_extract_playlist_id_from_url() {
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_extract_playlist_id_strips_query_string() {
    assert_eq!(
        extract_playlist_id(
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=f3a1b2c3&utm_source=copy"
        ),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_extract_playlist_id_passes_bare_id_through() {
    assert_eq!(
        extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );

    // Query suffix is stripped even without a path
    assert_eq!(
        extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M?si=abc"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_duration_minutes_conversion() {
    // 3 minutes 30 seconds
    assert_eq!(duration_minutes(210_000), 3.5);

    assert_eq!(duration_minutes(0), 0.0);

    // Rounding to two decimal places
    assert_eq!(duration_minutes(185_000), 3.08);
    assert_eq!(duration_minutes(199_999), 3.33);
    assert_eq!(duration_minutes(200_500), 3.34);
}

#[test]
fn test_flatten_tracks_maps_every_field() {
    let items = vec![
        create_test_item("First", "Alpha", "Debut", 210_000),
        create_test_item("Second", "Beta", "Follow-up", 185_000),
        create_test_item("Third", "Alpha", "Debut", 60_000),
    ];

    let records = flatten_tracks(&items).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        TrackRecord {
            song_name: "First".to_string(),
            artist: "Alpha".to_string(),
            album: "Debut".to_string(),
            duration_min: 3.5,
            popularity: 50,
        }
    );
    // API order is preserved
    assert_eq!(records[1].song_name, "Second");
    assert_eq!(records[2].duration_min, 1.0);
}

#[test]
fn test_flatten_tracks_keeps_only_first_artist() {
    let mut item = create_test_item("Collab", "Lead", "Features", 200_000);
    if let Some(track) = item.track.as_mut() {
        track.artists.push(ApiArtist {
            name: "Guest".to_string(),
        });
    }

    let records = flatten_tracks(&[item]).unwrap();

    assert_eq!(records[0].artist, "Lead");
}

#[test]
fn test_flatten_tracks_fails_on_artistless_track() {
    let mut item = create_test_item("Orphan", "whoever", "Album", 100_000);
    if let Some(track) = item.track.as_mut() {
        track.artists.clear();
    }

    let err = flatten_tracks(&[item]).unwrap_err();

    assert!(matches!(err, Error::Api(_)));
}

#[test]
fn test_flatten_tracks_fails_on_missing_track() {
    let items = vec![
        create_test_item("Fine", "Artist", "Album", 100_000),
        PlaylistItem { track: None },
    ];

    let err = flatten_tracks(&items).unwrap_err();

    assert!(matches!(err, Error::Api(_)));
}

#[test]
fn test_top_artists_selects_by_count_with_stable_ties() {
    // A:3, B:3, C:2, D:1, E:1, F:1 in order of first appearance
    let mut records = Vec::new();
    for artist in ["A", "A", "A", "B", "B", "B", "C", "C", "D", "E", "F"] {
        records.push(create_test_record(artist));
    }

    let top = top_artists(&records, 5);

    assert_eq!(
        top,
        vec![
            ("A".to_string(), 3),
            ("B".to_string(), 3),
            ("C".to_string(), 2),
            ("D".to_string(), 1),
            ("E".to_string(), 1),
        ]
    );

    // The sixth-place artist is excluded
    assert!(!top.iter().any(|(name, _)| name == "F"));
}

#[test]
fn test_top_artists_with_fewer_artists_than_limit() {
    let records = vec![
        create_test_record("Solo"),
        create_test_record("Solo"),
        create_test_record("Other"),
    ];

    let top = top_artists(&records, 5);

    assert_eq!(
        top,
        vec![("Solo".to_string(), 2), ("Other".to_string(), 1)]
    );
}

#[test]
fn test_render_table_has_header_and_one_row_per_record() {
    let records = vec![create_test_record("A"), create_test_record("B")];

    let table = render_table(&records);

    assert!(table.contains("Song Name"));
    assert!(table.contains("Duration (min)"));
    assert!(table.contains("A's song"));
    assert!(table.contains("B's song"));

    // Header, separator, and one line per record
    assert_eq!(table.lines().count(), 4);
}
