use std::collections::HashSet;

use songcli::types::{Song, SongField, SongFields};
use songcli::view::*;

// Helper function to create a stored song
fn create_test_song(id: &str, title: &str, artist: &str) -> Song {
    Song {
        id: Some(id.to_string()),
        title: title.to_string(),
        artist: artist.to_string(),
        year: "2000".to_string(),
        image_url: String::new(),
        audio_url: String::new(),
    }
}

// Helper function to apply events that never produce an effect
fn apply(state: ViewState, events: Vec<Event>) -> ViewState {
    events.into_iter().fold(state, |state, event| reduce(state, event).0)
}

fn loaded(songs: Vec<Song>) -> ViewState {
    apply(ViewState::default(), vec![Event::SongsLoaded(songs)])
}

fn selected(songs: Vec<Song>, song: Song) -> ViewState {
    apply(loaded(songs), vec![Event::SongFound(song)])
}

#[test]
fn test_initial_state() {
    let state = ViewState::default();

    assert!(state.songs().is_empty());
    assert!(state.selected().is_none());
    assert!(state.error().is_none());
    assert!(!state.is_editing());
    assert_eq!(state.panel(), DetailsPanel::Idle);
    assert!(state.draft().is_draft());
}

#[test]
fn test_songs_loaded_replaces_collection() {
    let state = loaded(vec![create_test_song("1", "A", "X")]);
    let state = apply(
        state,
        vec![Event::SongsLoaded(vec![
            create_test_song("2", "B", "Y"),
            create_test_song("3", "C", "Z"),
        ])],
    );

    let ids: Vec<_> = state.songs().iter().map(|s| s.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn test_load_requested_issues_list_request() {
    let (state, effect) = reduce(ViewState::default(), Event::LoadRequested);
    let effect = effect.expect("list request");

    assert_eq!(effect.request, Request::ListAll);
    assert_eq!(effect.ticket.class, RequestClass::List);
    assert!(state.tickets().is_current(effect.ticket));
}

#[test]
fn test_empty_search_is_noop() {
    let state = selected(
        vec![create_test_song("1", "A", "X")],
        create_test_song("1", "A", "X"),
    );

    for id in ["", "   "] {
        let (next, effect) = reduce(state.clone(), Event::SearchSubmitted(id.to_string()));
        assert!(effect.is_none());
        assert_eq!(next, state);
    }
}

#[test]
fn test_search_clears_selection_and_error() {
    let state = apply(ViewState::default(), vec![Event::SongNotFound]);
    assert!(state.error().is_some());

    let (state, effect) = reduce(state, Event::SearchSubmitted(" 42 ".to_string()));
    let effect = effect.expect("lookup request");

    assert_eq!(effect.request, Request::Lookup("42".to_string()));
    assert_eq!(effect.ticket.class, RequestClass::Search);
    assert!(state.selected().is_none());
    assert!(state.error().is_none());
    assert_eq!(state.panel(), DetailsPanel::Searching);
}

#[test]
fn test_song_found_selects_and_exits_edit_mode() {
    let state = selected(vec![], create_test_song("1", "A", "X"));
    let state = apply(state, vec![Event::EditRequested]);
    assert!(state.is_editing());

    let state = apply(state, vec![Event::SongFound(create_test_song("2", "B", "Y"))]);

    assert_eq!(state.selected().unwrap().title, "B");
    assert!(!state.is_editing());
    assert_eq!(state.panel(), DetailsPanel::Found);
    assert!(state.error().is_none());
}

#[test]
fn test_song_not_found_is_idempotent() {
    let state = selected(vec![], create_test_song("1", "A", "X"));

    let once = apply(state, vec![Event::SongNotFound]);
    let twice = apply(once.clone(), vec![Event::SongNotFound]);

    assert_eq!(once, twice);
    assert!(once.selected().is_none());
    assert_eq!(once.error(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(once.panel(), DetailsPanel::NotFound);
}

#[test]
fn test_error_dismissed() {
    let state = apply(
        ViewState::default(),
        vec![Event::SongNotFound, Event::ErrorDismissed],
    );

    assert!(state.error().is_none());
    assert_eq!(state.panel(), DetailsPanel::Idle);
}

#[test]
fn test_edit_requires_selection() {
    let state = apply(ViewState::default(), vec![Event::EditRequested]);
    assert!(!state.is_editing());

    let state = apply(
        state,
        vec![Event::EditFieldChanged(SongField::Title, "B".to_string())],
    );
    assert!(state.selected().is_none());
}

#[test]
fn test_edit_field_changes_selection_only() {
    let song = create_test_song("1", "A", "X");
    let state = selected(vec![song.clone()], song);

    let state = apply(
        state,
        vec![
            Event::EditRequested,
            Event::EditFieldChanged(SongField::Artist, "Y".to_string()),
            Event::EditFieldChanged(SongField::AudioUrl, "https://a/b.mp3".to_string()),
        ],
    );

    let sel = state.selected().unwrap();
    assert_eq!(sel.artist, "Y");
    assert_eq!(sel.audio_url, "https://a/b.mp3");
    assert_eq!(state.songs()[0].artist, "X");
    assert!(state.has_unsaved_edits());
}

#[test]
fn test_edit_cancel_restores_selection() {
    let song = create_test_song("1", "A", "X");
    let state = selected(vec![song.clone()], song.clone());

    let state = apply(
        state,
        vec![
            Event::EditRequested,
            Event::EditFieldChanged(SongField::Title, "B".to_string()),
            Event::EditCancelled,
        ],
    );

    assert_eq!(state.selected(), Some(&song));
    assert_eq!(state.panel(), DetailsPanel::Found);
    assert!(!state.has_unsaved_edits());
}

#[test]
fn test_update_submitted_sends_fields_without_local_mutation() {
    let song = create_test_song("1", "A", "X");
    let state = selected(vec![song.clone()], song);
    let state = apply(
        state,
        vec![
            Event::EditRequested,
            Event::EditFieldChanged(SongField::Title, "B".to_string()),
        ],
    );

    let (state, effect) = reduce(state, Event::UpdateSubmitted);
    let effect = effect.expect("update request");

    match effect.request {
        Request::Update { id, fields } => {
            assert_eq!(id, "1");
            assert_eq!(fields.title, "B");
            assert_eq!(fields.artist, "X");
        }
        other => panic!("unexpected request {:?}", other),
    }
    assert_eq!(effect.ticket.class, RequestClass::Mutate);
    assert_eq!(state.songs()[0].title, "A");
    assert!(state.is_editing());
}

#[test]
fn test_update_and_delete_need_stored_selection() {
    let state = ViewState::default();
    assert!(reduce(state.clone(), Event::UpdateSubmitted).1.is_none());
    assert!(reduce(state.clone(), Event::DeleteSubmitted).1.is_none());

    let draft = Song {
        title: "No id".to_string(),
        ..Song::default()
    };
    let state = selected(vec![], draft);
    assert!(reduce(state.clone(), Event::UpdateSubmitted).1.is_none());
    assert!(reduce(state, Event::DeleteSubmitted).1.is_none());
}

#[test]
fn test_song_updated_replaces_exactly_one_entry() {
    let songs = vec![
        create_test_song("1", "A", "X"),
        create_test_song("2", "B", "Y"),
        create_test_song("3", "C", "Z"),
    ];
    let state = selected(songs.clone(), songs[1].clone());
    let state = apply(state, vec![Event::EditRequested]);

    let updated = Song {
        title: "B2".to_string(),
        year: "2024".to_string(),
        ..songs[1].clone()
    };
    let state = apply(state, vec![Event::SongUpdated(updated.clone())]);

    assert_eq!(state.songs().len(), 3);
    assert_eq!(state.songs()[0], songs[0]);
    assert_eq!(state.songs()[1], updated);
    assert_eq!(state.songs()[2], songs[2]);
    assert_eq!(state.selected(), Some(&updated));
    assert!(!state.is_editing());
}

#[test]
fn test_song_deleted_removes_entry_and_clears_selection() {
    let songs = vec![
        create_test_song("1", "A", "X"),
        create_test_song("2", "B", "Y"),
        create_test_song("3", "C", "Z"),
    ];
    let state = selected(songs.clone(), songs[1].clone());
    let state = apply(
        state,
        vec![Event::EditRequested, Event::SongDeleted("2".to_string())],
    );

    assert_eq!(state.songs(), &[songs[0].clone(), songs[2].clone()]);
    assert!(!state.songs().iter().any(|s| s.id.as_deref() == Some("2")));
    assert!(state.selected().is_none());
    assert!(!state.is_editing());
    assert_eq!(state.panel(), DetailsPanel::Idle);
}

#[test]
fn test_new_song_draft_and_add_submitted() {
    let state = apply(
        ViewState::default(),
        vec![
            Event::NewSongFieldChanged(SongField::Title, "Song".to_string()),
            Event::NewSongFieldChanged(SongField::Artist, "Band".to_string()),
            Event::NewSongFieldChanged(SongField::Year, "1999".to_string()),
        ],
    );
    assert_eq!(state.draft().title, "Song");
    assert!(state.draft().is_draft());

    let (state, effect) = reduce(state, Event::AddSubmitted);
    let effect = effect.expect("create request");

    match effect.request {
        Request::Create(draft) => {
            assert_eq!(draft.title, "Song");
            assert_eq!(draft.artist, "Band");
            assert!(draft.id.is_none());
        }
        other => panic!("unexpected request {:?}", other),
    }
    assert!(state.songs().is_empty());
    assert_eq!(state.draft().title, "Song");
}

#[test]
fn test_song_added_appends_one_and_resets_draft() {
    let mut state = apply(
        loaded(vec![create_test_song("1", "A", "X")]),
        vec![Event::NewSongFieldChanged(SongField::Title, "N".to_string())],
    );

    for i in 2..6 {
        let before = state.songs().len();
        state = apply(
            state,
            vec![Event::SongAdded(create_test_song(&i.to_string(), "N", "M"))],
        );
        assert_eq!(state.songs().len(), before + 1);
        assert_eq!(state.draft(), &Song::default());
    }

    let ids: HashSet<_> = state.songs().iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids.len(), state.songs().len());
}

#[test]
fn test_song_added_with_known_id_does_not_duplicate() {
    let state = loaded(vec![create_test_song("1", "A", "X")]);
    let state = apply(state, vec![Event::SongAdded(create_test_song("1", "A2", "X"))]);

    assert_eq!(state.songs().len(), 1);
    assert_eq!(state.songs()[0].title, "A2");
}

#[test]
fn test_request_failed_keeps_collection() {
    let songs = vec![create_test_song("1", "A", "X")];
    let state = selected(songs.clone(), songs[0].clone());

    let state = apply(
        state,
        vec![Event::RequestFailed {
            class: RequestClass::Mutate,
            message: "Could not delete song: boom".to_string(),
        }],
    );

    assert_eq!(state.songs(), songs.as_slice());
    assert_eq!(state.selected(), Some(&songs[0]));
    assert_eq!(state.error(), Some("Could not delete song: boom"));
}

#[test]
fn test_failed_search_returns_to_idle() {
    let (state, _) = reduce(ViewState::default(), Event::SearchSubmitted("1".to_string()));
    let state = apply(
        state,
        vec![Event::RequestFailed {
            class: RequestClass::Search,
            message: "Could not look up song: offline".to_string(),
        }],
    );

    assert_eq!(state.panel(), DetailsPanel::Idle);
    assert_ne!(state.error(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn test_settle_discards_superseded_search() {
    let (state, first) = reduce(ViewState::default(), Event::SearchSubmitted("1".to_string()));
    let (state, second) = reduce(state, Event::SearchSubmitted("2".to_string()));
    let (first, second) = (first.unwrap(), second.unwrap());

    let state = settle(
        state,
        first.ticket,
        Event::SongFound(create_test_song("1", "Old", "X")),
    );
    assert!(state.selected().is_none());
    assert_eq!(state.panel(), DetailsPanel::Searching);

    let state = settle(
        state,
        second.ticket,
        Event::SongFound(create_test_song("2", "New", "Y")),
    );
    assert_eq!(state.selected().unwrap().title, "New");
}

#[test]
fn test_settle_classes_are_independent() {
    let (state, list) = reduce(ViewState::default(), Event::LoadRequested);
    let (state, search) = reduce(state, Event::SearchSubmitted("1".to_string()));

    let state = settle(
        state,
        list.unwrap().ticket,
        Event::SongsLoaded(vec![create_test_song("1", "A", "X")]),
    );
    let state = settle(
        state,
        search.unwrap().ticket,
        Event::SongFound(create_test_song("1", "A", "X")),
    );

    assert_eq!(state.songs().len(), 1);
    assert_eq!(state.selected().unwrap().title, "A");
}

#[test]
fn test_settle_keeps_superseded_add_and_delete() {
    let song = create_test_song("1", "A", "X");
    let state = apply(
        selected(vec![song.clone()], song),
        vec![Event::NewSongFieldChanged(SongField::Title, "New".to_string())],
    );

    let (state, add) = reduce(state, Event::AddSubmitted);
    let (state, delete) = reduce(state, Event::DeleteSubmitted);
    let (add, delete) = (add.unwrap(), delete.unwrap());
    assert!(!state.tickets().is_current(add.ticket));

    let state = settle(
        state,
        add.ticket,
        Event::SongAdded(create_test_song("2", "New", "Y")),
    );
    assert_eq!(state.songs().len(), 2);
    assert_eq!(state.draft(), &Song::default());
    assert_eq!(state.selected().unwrap().id.as_deref(), Some("1"));

    let state = settle(state, delete.ticket, Event::SongDeleted("1".to_string()));
    let ids: Vec<_> = state.songs().iter().map(|s| s.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["2"]);
    assert!(state.selected().is_none());
}

#[test]
fn test_settle_superseded_update_only_touches_collection() {
    let songs = vec![create_test_song("1", "A", "X"), create_test_song("2", "B", "Y")];
    let state = selected(songs.clone(), songs[0].clone());

    let (state, update) = reduce(state, Event::UpdateSubmitted);
    let state = apply(state, vec![Event::SongFound(songs[1].clone())]);
    let (state, delete) = reduce(state, Event::DeleteSubmitted);
    let (update, delete) = (update.unwrap(), delete.unwrap());

    let updated = Song {
        title: "A2".to_string(),
        ..songs[0].clone()
    };
    let state = settle(state, update.ticket, Event::SongUpdated(updated.clone()));

    assert_eq!(state.songs()[0], updated);
    assert_eq!(state.selected(), Some(&songs[1]));
    assert_eq!(state.panel(), DetailsPanel::Found);
    assert!(state.tickets().is_current(delete.ticket));
}

#[test]
fn test_settle_superseded_mutation_failure_is_reported() {
    let song = create_test_song("1", "A", "X");
    let (state, add) = reduce(selected(vec![song.clone()], song), Event::AddSubmitted);
    let (state, _delete) = reduce(state, Event::DeleteSubmitted);

    let state = settle(
        state,
        add.unwrap().ticket,
        Event::RequestFailed {
            class: RequestClass::Mutate,
            message: "Could not add song: offline".to_string(),
        },
    );

    assert_eq!(state.error(), Some("Could not add song: offline"));
    assert_eq!(state.songs().len(), 1);
}

#[test]
fn test_ticket_ledger() {
    let mut ledger = TicketLedger::default();
    let never_issued = Ticket {
        class: RequestClass::List,
        generation: 0,
    };
    assert!(!ledger.is_current(never_issued));

    let a = ledger.issue(RequestClass::Mutate);
    let b = ledger.issue(RequestClass::Mutate);
    let c = ledger.issue(RequestClass::List);

    assert!(!ledger.is_current(a));
    assert!(ledger.is_current(b));
    assert!(ledger.is_current(c));
    assert_eq!(ledger.latest(RequestClass::Mutate), 2);
    assert_eq!(ledger.latest(RequestClass::Search), 0);
}

#[test]
fn test_browse_edit_delete_scenario() {
    let song = Song {
        id: Some("1".to_string()),
        title: "A".to_string(),
        artist: "X".to_string(),
        year: "2000".to_string(),
        image_url: String::new(),
        audio_url: String::new(),
    };

    let (state, list) = reduce(ViewState::default(), Event::LoadRequested);
    let state = settle(state, list.unwrap().ticket, Event::SongsLoaded(vec![song.clone()]));
    assert_eq!(state.songs().len(), 1);
    assert_eq!(state.songs()[0].id.as_deref(), Some("1"));

    let (state, search) = reduce(state, Event::SearchSubmitted("1".to_string()));
    let state = settle(state, search.unwrap().ticket, Event::SongFound(song.clone()));
    assert_eq!(state.selected().unwrap().title, "A");

    let (state, _) = reduce(
        state,
        Event::EditFieldChanged(SongField::Title, "B".to_string()),
    );
    assert_eq!(state.selected().unwrap().title, "B");
    assert_eq!(state.songs()[0].title, "A");

    let (state, update) = reduce(state, Event::UpdateSubmitted);
    let update = update.unwrap();
    let fields = SongFields::from(state.selected().unwrap());
    assert_eq!(
        update.request,
        Request::Update {
            id: "1".to_string(),
            fields
        }
    );
    let updated = Song {
        title: "B".to_string(),
        ..song
    };
    let state = settle(state, update.ticket, Event::SongUpdated(updated));
    assert_eq!(state.songs()[0].title, "B");
    assert_eq!(state.selected().unwrap().title, "B");

    let (state, delete) = reduce(state, Event::DeleteSubmitted);
    let delete = delete.unwrap();
    assert_eq!(delete.request, Request::Delete("1".to_string()));
    let state = settle(state, delete.ticket, Event::SongDeleted("1".to_string()));
    assert!(state.songs().is_empty());
    assert!(state.selected().is_none());
}
