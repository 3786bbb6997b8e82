use crate::{types::Song, view::TicketLedger};

/// Message shown when a lookup finds no song.
pub const NOT_FOUND_MESSAGE: &str = "Song not found";

/// States of the "Song Details" panel.
///
/// `Idle -> Searching -> {Found, NotFound}`, `Found -> Editing -> Found`,
/// `Found -> Idle` on delete. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailsPanel {
    #[default]
    Idle,
    Searching,
    Found,
    NotFound,
    Editing,
}

/// Everything the front end currently displays.
///
/// Only [`reduce`](super::reduce) and [`settle`](super::settle) produce new
/// states; the front end gets read access through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) songs: Vec<Song>,
    pub(crate) selected: Option<Song>,
    // last remote-confirmed copy of the selection, restored on cancel
    pub(crate) pristine: Option<Song>,
    pub(crate) draft: Song,
    pub(crate) error: Option<String>,
    pub(crate) panel: DetailsPanel,
    pub(crate) tickets: TicketLedger,
}

impl ViewState {
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn selected(&self) -> Option<&Song> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &Song {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn panel(&self) -> DetailsPanel {
        self.panel
    }

    pub fn is_editing(&self) -> bool {
        self.panel == DetailsPanel::Editing
    }

    pub fn tickets(&self) -> &TicketLedger {
        &self.tickets
    }

    /// True if the selection differs from the last confirmed remote copy.
    pub fn has_unsaved_edits(&self) -> bool {
        self.selected.is_some() && self.selected != self.pristine
    }
}
