//! # CLI Module
//!
//! Command-line front end for the song library. It plays the role of the
//! presentation layer: it turns user input into view events, runs the
//! resulting remote calls and prints the view state.
//!
//! ## Commands
//!
//! - [`list_songs`] - Loads all songs and prints them as a table, optionally
//!   filtered by a title/artist search term
//! - [`show_song`] - Looks up a song by id and prints its details
//! - [`add_song`] - Fills in a new song and submits it
//! - [`update_song`] - Looks up a song, edits the given fields and saves it
//! - [`delete_song`] - Looks up a song and deletes it
//! - [`session`] - Interactive loop over the full view state
//!
//! ## Error Handling
//!
//! One-shot commands stop with an error message when the remote call fails.
//! A song that does not exist is reported as a warning. The interactive
//! session never exits on a failed call; the error shows as a banner until
//! the next successful search or `dismiss`.
//!
//! ## Usage
//!
//! ```bash
//! songcli list --search queen
//! songcli show 64b7f0c2e1
//! songcli add --title "Bohemian Rhapsody" --artist Queen --year 1975
//! songcli update 64b7f0c2e1 --year 1976
//! songcli delete 64b7f0c2e1
//! songcli session
//! ```

mod edit;
mod render;
mod session;
mod songs;

pub use edit::add_song;
pub use edit::delete_song;
pub use edit::update_song;
pub use session::SessionCommand;
pub use session::parse_command;
pub use session::session;
pub use songs::list_songs;
pub use songs::show_song;
