use std::fmt;

use reqwest::StatusCode;

/// Failures reported by [`SongClient`](super::SongClient).
///
/// `NotFound` is the only recoverable, user-facing kind; everything else is
/// a failed request that leaves the caller's state untouched.
#[derive(Debug)]
pub enum SongError {
    InvalidBaseUrl(String),
    Network(reqwest::Error),
    NotFound { id: String },
    Remote { status: StatusCode },
    Decode(reqwest::Error),
}

impl SongError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SongError::NotFound { .. })
    }

    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SongError::Decode(err)
        } else {
            SongError::Network(err)
        }
    }
}

impl fmt::Display for SongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongError::InvalidBaseUrl(url) => write!(f, "Invalid song API url: {}", url),
            SongError::Network(e) => write!(f, "Request failed: {}", e),
            SongError::NotFound { .. } => write!(f, "Song not found"),
            SongError::Remote { status } => write!(f, "Song API responded with {}", status),
            SongError::Decode(e) => write!(f, "Unexpected response from song API: {}", e),
        }
    }
}

impl std::error::Error for SongError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SongError::Network(e) | SongError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SongError {
    fn from(err: reqwest::Error) -> Self {
        SongError::Network(err)
    }
}
