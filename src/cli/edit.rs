use crate::{
    cli::{render, songs::lookup},
    error, info,
    remote::SongClient,
    success,
    types::SongField,
    utils,
    view::{Controller, Event},
    warning,
};

/// Fills in a new song field by field and submits it.
///
/// # Arguments
///
/// * `client` - Client for the song API
/// * `fields` - Field values given on the command line
///
/// # Output
///
/// Prints the created song together with the id the API assigned.
///
/// # Example Usage
///
/// ```bash
/// songcli add --title "Bohemian Rhapsody" --artist Queen --year 1975
/// ```
pub async fn add_song(client: SongClient, fields: Vec<(SongField, String)>) {
    let mut controller = Controller::new(client);
    for (field, value) in fields {
        controller
            .dispatch(Event::NewSongFieldChanged(field, value))
            .await;
    }

    if controller.state().draft().title.trim().is_empty() {
        warning!("Adding a song without a title.");
    }

    let pb = utils::spinner("Adding song...");
    let state = controller.dispatch(Event::AddSubmitted).await;
    pb.finish_and_clear();

    if let Some(e) = state.error() {
        error!("{}", e);
    }

    match state.songs().last() {
        Some(song) => {
            success!(
                "Added {} with id {}",
                song.display_title(),
                song.id.as_deref().unwrap_or("-")
            );
            render::song_details(song);
        }
        None => warning!("The song API did not return the added song."),
    }
}

/// Looks up song `id`, applies `changes` in edit mode and saves it.
///
/// Fields that are not given keep their current value. Nothing is sent
/// when `changes` is empty.
///
/// # Example Usage
///
/// ```bash
/// songcli update 64b7f0c2e1 --year 1976 --url https://audio/song.mp3
/// ```
pub async fn update_song(client: SongClient, id: String, changes: Vec<(SongField, String)>) {
    if changes.is_empty() {
        warning!("Nothing to update. Pass at least one of --title, --artist, --year, --img-url, --url.");
        return;
    }

    let mut controller = Controller::new(client);
    if !lookup(&mut controller, &id).await {
        return;
    }

    controller.dispatch(Event::EditRequested).await;
    for (field, value) in changes {
        info!("Set {} to '{}'", field, value);
        controller.dispatch(Event::EditFieldChanged(field, value)).await;
    }

    let pb = utils::spinner("Updating song...");
    let state = controller.dispatch(Event::UpdateSubmitted).await;
    pb.finish_and_clear();

    if let Some(e) = state.error() {
        error!("{}", e);
    }

    if let Some(song) = state.selected() {
        success!("Updated {}", song.display_title());
        render::song_details(song);
    }
}

/// Looks up song `id` and deletes it.
///
/// # Example Usage
///
/// ```bash
/// songcli delete 64b7f0c2e1
/// ```
pub async fn delete_song(client: SongClient, id: String) {
    let mut controller = Controller::new(client);
    if !lookup(&mut controller, &id).await {
        return;
    }

    let title = controller
        .state()
        .selected()
        .map(|s| s.display_title())
        .unwrap_or_default();

    let pb = utils::spinner("Deleting song...");
    let state = controller.dispatch(Event::DeleteSubmitted).await;
    pb.finish_and_clear();

    if let Some(e) = state.error() {
        error!("{}", e);
    }

    success!("Deleted {} ({})", title, id.trim());
}
