use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Song, SongTableRow};

/// Keeps the songs whose title or artist contains `search`, ignoring case.
///
/// A blank search term keeps every song.
///
/// # Arguments
///
/// * `songs` - Songs to filter in place
/// * `search` - Text to look for
///
/// # Example
///
/// ```
/// filter_songs(&mut songs, "queen");
/// ```
pub fn filter_songs(songs: &mut Vec<Song>, search: &str) {
    let search_term = search.trim().to_lowercase();
    if search_term.is_empty() {
        return;
    }
    songs.retain(|s| {
        s.title.to_lowercase().contains(&search_term)
            || s.artist.to_lowercase().contains(&search_term)
    });
}

/// Converts songs into table rows. Drafts get an empty id column.
pub fn song_table_rows(songs: &[Song]) -> Vec<SongTableRow> {
    songs
        .iter()
        .map(|s| SongTableRow {
            id: s.id.clone().unwrap_or_default(),
            title: s.title.clone(),
            artist: s.artist.clone(),
            year: s.year.clone(),
        })
        .collect()
}

/// Sorts rows by title, then artist, both case-insensitive.
pub fn sort_song_table_rows(rows: &mut [SongTableRow]) {
    rows.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.artist.to_lowercase().cmp(&b.artist.to_lowercase()))
    });
}

/// Label/value lines for the song details view.
///
/// A song without an audio URL shows a notice instead of an empty line.
pub fn song_details(song: &Song) -> Vec<(&'static str, String)> {
    let audio = if song.has_audio() {
        song.audio_url.clone()
    } else {
        "This song does not have an audio file.".to_string()
    };

    vec![
        ("Id", song.id.clone().unwrap_or_else(|| "-".to_string())),
        ("Title", song.title.clone()),
        ("Artist", song.artist.clone()),
        ("Year", song.year.clone()),
        ("Image", song.image_url.clone()),
        ("Audio", audio),
    ]
}

/// Starts a steady-ticking spinner with `message`.
///
/// The caller clears it with `finish_and_clear()` once the request returns.
///
/// # Example
///
/// ```
/// let pb = spinner("Fetching songs...");
/// let songs = client.list_all().await;
/// pb.finish_and_clear();
/// ```
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
