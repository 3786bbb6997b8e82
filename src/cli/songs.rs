use crate::{
    cli::render,
    error, info,
    remote::SongClient,
    utils,
    view::{Controller, DetailsPanel, Event, NOT_FOUND_MESSAGE},
    warning,
};

/// Loads every song from the API and prints them as a table.
///
/// # Arguments
///
/// * `client` - Client for the song API
/// * `search` - Optional text matched against title and artist
///
/// # Error Handling
///
/// A failed request terminates the program with an error message.
///
/// # Example Usage
///
/// ```bash
/// songcli list
/// songcli list --search queen
/// ```
pub async fn list_songs(client: SongClient, search: Option<String>) {
    let mut controller = Controller::new(client);

    let pb = utils::spinner("Fetching songs...");
    let state = controller.dispatch(Event::LoadRequested).await;
    pb.finish_and_clear();

    if let Some(e) = state.error() {
        error!("{}", e);
    }

    let mut songs = state.songs().to_vec();
    if let Some(search) = search {
        utils::filter_songs(&mut songs, &search);
    }

    render::song_table(&songs);
    info!("{} of {} songs", songs.len(), state.songs().len());
}

/// Looks up a song by id and prints its details.
///
/// A missing song prints a warning; other failures terminate the program.
///
/// # Example Usage
///
/// ```bash
/// songcli show 64b7f0c2e1
/// ```
pub async fn show_song(client: SongClient, id: String) {
    let mut controller = Controller::new(client);
    if lookup(&mut controller, &id).await {
        if let Some(song) = controller.state().selected() {
            render::song_details(song);
        }
    }
}

/// Searches for `id` and reports the outcome. Returns true if the song was
/// found and is now selected.
pub(crate) async fn lookup(controller: &mut Controller, id: &str) -> bool {
    if id.trim().is_empty() {
        warning!("Please provide a song id.");
        return false;
    }

    let pb = utils::spinner(&format!("Looking up song {}...", id.trim()));
    let state = controller
        .dispatch(Event::SearchSubmitted(id.to_string()))
        .await;
    pb.finish_and_clear();

    match state.panel() {
        DetailsPanel::Found => true,
        DetailsPanel::NotFound => {
            warning!("{}", state.error().unwrap_or(NOT_FOUND_MESSAGE));
            false
        }
        _ => {
            if let Some(e) = state.error() {
                error!("{}", e);
            }
            false
        }
    }
}
