use crate::{
    types::{Song, SongFields},
    view::{
        DetailsPanel, Effect, Event, NOT_FOUND_MESSAGE, Request, RequestClass, Ticket, ViewState,
    },
};

/// Applies `event` to `state` and returns the new state together with the
/// remote call the event asks for, if any.
///
/// Submitted events never touch the song collection. The collection only
/// changes once a completion event (`SongsLoaded`, `SongAdded`,
/// `SongUpdated`, `SongDeleted`) confirms the remote side.
pub fn reduce(mut state: ViewState, event: Event) -> (ViewState, Option<Effect>) {
    match event {
        Event::LoadRequested => {
            let effect = issue(&mut state, Request::ListAll);
            return (state, Some(effect));
        }
        Event::SongsLoaded(songs) => {
            state.songs = songs;
        }
        Event::SearchSubmitted(id) => {
            let id = id.trim();
            if id.is_empty() {
                return (state, None);
            }

            state.selected = None;
            state.pristine = None;
            state.error = None;
            state.panel = DetailsPanel::Searching;
            let effect = issue(&mut state, Request::Lookup(id.to_string()));
            return (state, Some(effect));
        }
        Event::SongFound(song) => {
            state.pristine = Some(song.clone());
            state.selected = Some(song);
            state.error = None;
            state.panel = DetailsPanel::Found;
        }
        Event::SongNotFound => {
            state.selected = None;
            state.pristine = None;
            state.error = Some(NOT_FOUND_MESSAGE.to_string());
            state.panel = DetailsPanel::NotFound;
        }
        Event::EditRequested => {
            if state.selected.is_some() {
                state.panel = DetailsPanel::Editing;
            }
        }
        Event::EditFieldChanged(field, value) => {
            if let Some(song) = state.selected.as_mut() {
                song.set_field(field, value);
            }
        }
        Event::EditCancelled => {
            if state.panel == DetailsPanel::Editing {
                state.selected = state.pristine.clone();
                state.panel = DetailsPanel::Found;
            }
        }
        Event::UpdateSubmitted => {
            let request = state.selected.as_ref().and_then(|song| {
                song.id.clone().map(|id| Request::Update {
                    id,
                    fields: SongFields::from(song),
                })
            });
            if let Some(request) = request {
                let effect = issue(&mut state, request);
                return (state, Some(effect));
            }
        }
        Event::SongUpdated(song) => {
            replace_song(&mut state.songs, &song);
            state.pristine = Some(song.clone());
            state.selected = Some(song);
            state.panel = DetailsPanel::Found;
        }
        Event::DeleteSubmitted => {
            let id = state.selected.as_ref().and_then(|song| song.id.clone());
            if let Some(id) = id {
                let effect = issue(&mut state, Request::Delete(id));
                return (state, Some(effect));
            }
        }
        Event::SongDeleted(id) => {
            state.songs.retain(|song| song.id.as_deref() != Some(id.as_str()));
            state.selected = None;
            state.pristine = None;
            state.panel = DetailsPanel::Idle;
        }
        Event::NewSongFieldChanged(field, value) => {
            state.draft.set_field(field, value);
        }
        Event::AddSubmitted => {
            let request = Request::Create(state.draft.clone());
            let effect = issue(&mut state, request);
            return (state, Some(effect));
        }
        Event::SongAdded(song) => {
            add_song(&mut state.songs, song);
            state.draft = Song::default();
            if state.panel == DetailsPanel::Editing {
                state.panel = DetailsPanel::Found;
            }
        }
        Event::Deselected => {
            state.selected = None;
            state.pristine = None;
            state.panel = DetailsPanel::Idle;
        }
        Event::ErrorDismissed => {
            state.error = None;
            if state.panel == DetailsPanel::NotFound {
                state.panel = DetailsPanel::Idle;
            }
        }
        Event::RequestFailed { class, message } => {
            state.error = Some(message);
            if class == RequestClass::Search && state.panel == DetailsPanel::Searching {
                state.panel = DetailsPanel::Idle;
            }
        }
    }

    (state, None)
}

/// Applies a completion event for the request that carried `ticket`.
///
/// A current ticket applies the event in full. A superseded read (`List`,
/// `Search`) is dropped. A superseded mutation was still confirmed by the
/// remote, so its effect on the collection, the draft and the error message
/// is kept, while selection and panel stay with the newer request.
pub fn settle(state: ViewState, ticket: Ticket, event: Event) -> ViewState {
    if state.tickets.is_current(ticket) {
        return reduce(state, event).0;
    }

    match ticket.class {
        RequestClass::List | RequestClass::Search => state,
        RequestClass::Mutate => confirm(state, event),
    }
}

fn confirm(mut state: ViewState, event: Event) -> ViewState {
    match event {
        Event::SongAdded(song) => {
            add_song(&mut state.songs, song);
            state.draft = Song::default();
        }
        Event::SongUpdated(song) => {
            replace_song(&mut state.songs, &song);
        }
        Event::SongDeleted(id) => {
            state.songs.retain(|song| song.id.as_deref() != Some(id.as_str()));
            // a deleted song cannot stay on screen
            if state.selected.as_ref().and_then(|s| s.id.as_deref()) == Some(id.as_str()) {
                state.selected = None;
                state.pristine = None;
                state.panel = DetailsPanel::Idle;
            }
        }
        Event::RequestFailed { message, .. } => {
            state.error = Some(message);
        }
        _ => {}
    }
    state
}

fn issue(state: &mut ViewState, request: Request) -> Effect {
    let ticket = state.tickets.issue(request.class());
    Effect { ticket, request }
}

fn replace_song(songs: &mut [Song], song: &Song) {
    if let Some(entry) = songs
        .iter_mut()
        .find(|entry| entry.id.is_some() && entry.id == song.id)
    {
        *entry = song.clone();
    }
}

// An id the collection already holds is replaced rather than duplicated.
fn add_song(songs: &mut Vec<Song>, song: Song) {
    let existing = song
        .id
        .as_ref()
        .and_then(|id| songs.iter().position(|s| s.id.as_ref() == Some(id)));
    match existing {
        Some(index) => songs[index] = song,
        None => songs.push(song),
    }
}
