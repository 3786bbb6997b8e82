use crate::{
    types::{Song, SongField, SongFields},
    view::{RequestClass, Ticket},
};

/// User actions and completed remote calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadRequested,
    SongsLoaded(Vec<Song>),
    SearchSubmitted(String),
    SongFound(Song),
    SongNotFound,
    EditRequested,
    EditFieldChanged(SongField, String),
    EditCancelled,
    UpdateSubmitted,
    SongUpdated(Song),
    DeleteSubmitted,
    SongDeleted(String),
    NewSongFieldChanged(SongField, String),
    AddSubmitted,
    SongAdded(Song),
    Deselected,
    ErrorDismissed,
    RequestFailed { class: RequestClass, message: String },
}

/// A remote call the front end has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListAll,
    Lookup(String),
    Create(Song),
    Update { id: String, fields: SongFields },
    Delete(String),
}

impl Request {
    pub fn class(&self) -> RequestClass {
        match self {
            Request::ListAll => RequestClass::List,
            Request::Lookup(_) => RequestClass::Search,
            Request::Create(_) | Request::Update { .. } | Request::Delete(_) => {
                RequestClass::Mutate
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Request::ListAll => "load songs",
            Request::Lookup(_) => "look up song",
            Request::Create(_) => "add song",
            Request::Update { .. } => "update song",
            Request::Delete(_) => "delete song",
        }
    }
}

/// A request paired with the ticket its completion must present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub ticket: Ticket,
    pub request: Request,
}
