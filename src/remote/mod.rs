//! # Remote Song API Module
//!
//! HTTP client for the remote song storage service. The service is an
//! external collaborator; this module only translates the five domain
//! operations into requests and decodes the JSON replies into [`Song`]s.
//!
//! ## API Coverage
//!
//! | Operation  | Method   | Path              |
//! |------------|----------|-------------------|
//! | list all   | `GET`    | `/api/getall`     |
//! | get by id  | `GET`    | `/api/songs/{id}` |
//! | create     | `POST`   | `/api/add`        |
//! | update     | `PUT`    | `/api/songs/{id}` |
//! | delete     | `DELETE` | `/api/songs/{id}` |
//!
//! ## Error Handling
//!
//! Every operation returns a [`SongError`]. A non-success status on a
//! lookup is reported as [`SongError::NotFound`] so that callers can show a
//! not-found message instead of a generic failure. There is no retry logic:
//! the service is used interactively and a failed call is reported as is.
//!
//! ## Usage
//!
//! ```rust
//! let client = SongClient::new("https://songs.example.com")?;
//! let songs = client.list_all().await?;
//! let song = client.get_by_id("42").await?;
//! ```
//!
//! [`Song`]: crate::types::Song

mod error;
mod songs;

pub use error::SongError;
pub use songs::SongClient;
