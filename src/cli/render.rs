use colored::Colorize;
use tabled::Table;

use crate::{
    info,
    types::{Song, SongField},
    utils,
    view::{DetailsPanel, ViewState},
    warning,
};

/// Prints songs as a table sorted by title.
pub fn song_table(songs: &[Song]) {
    if songs.is_empty() {
        warning!("No songs found.");
        return;
    }

    let mut rows = utils::song_table_rows(songs);
    utils::sort_song_table_rows(&mut rows);
    println!("{}", Table::new(rows));
}

pub fn song_details(song: &Song) {
    for (label, value) in utils::song_details(song) {
        println!("  {:<7} {}", format!("{}:", label).bold(), value);
    }
}

/// Prints the error banner, the details panel and a non-empty draft.
pub fn view(state: &ViewState) {
    if let Some(message) = state.error() {
        warning!("{}", message);
    }

    match state.panel() {
        DetailsPanel::Idle => info!("{} songs loaded", state.songs().len()),
        DetailsPanel::Searching => info!("Searching..."),
        DetailsPanel::NotFound => {}
        DetailsPanel::Found | DetailsPanel::Editing => {
            if let Some(song) = state.selected() {
                let heading = if state.is_editing() {
                    "Edit Song Details"
                } else {
                    "Song Details"
                };
                println!("{}", heading.bold());
                song_details(song);
                if state.has_unsaved_edits() {
                    info!("Unsaved changes. Use 'save' or 'cancel'.");
                }
            }
        }
    }

    let draft = state.draft();
    if SongField::ALL.iter().any(|f| !draft.field(*f).is_empty()) {
        println!("{}", "New Song".bold());
        for field in SongField::ALL {
            println!("  {:<8} {}", format!("{}:", field).bold(), draft.field(field));
        }
    }
}

pub fn help() {
    println!("{}", "Commands".bold());
    println!("  list                 reload all songs from the API");
    println!("  songs                print the loaded songs");
    println!("  search ID            look up a song by id");
    println!("  edit                 edit the selected song");
    println!("  set FIELD VALUE      change a field of the selected song");
    println!("  save                 send the edited song to the API");
    println!("  cancel               discard local edits");
    println!("  delete               delete the selected song");
    println!("  close                deselect the current song");
    println!("  new FIELD VALUE      fill in a field of the new song");
    println!("  add                  add the new song");
    println!("  dismiss              dismiss the error message");
    println!("  show                 show the current view");
    println!("  help                 show this help");
    println!("  quit                 leave the session");
    println!("  FIELD is one of: title, artist, year, img_url, url");
}
