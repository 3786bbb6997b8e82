use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::{
    config,
    remote::SongError,
    types::{Song, SongFields},
};

/// Client for the remote song API.
///
/// Holds a reusable `reqwest::Client` and the validated base URL. Cloning is
/// cheap, so concurrent requests can each take their own handle.
#[derive(Debug, Clone)]
pub struct SongClient {
    http: Client,
    base_url: Url,
}

impl SongClient {
    /// Creates a client for the API rooted at `base_url` with the default
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SongError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// `http`/`https` URL.
    pub fn new(base_url: &str) -> Result<Self, SongError> {
        Self::with_timeout(
            base_url,
            Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SongError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|_| SongError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(SongError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Creates a client from `SONG_API_URL` and `SONG_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, SongError> {
        Self::with_timeout(&config::api_url(), config::request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the complete song collection.
    ///
    /// The API has no pagination; the whole set arrives in one response.
    ///
    /// # Errors
    ///
    /// - [`SongError::Network`] if the request could not complete
    /// - [`SongError::Remote`] on a non-success status
    /// - [`SongError::Decode`] if the body is not a JSON array of songs
    pub async fn list_all(&self) -> Result<Vec<Song>, SongError> {
        let api_url = self.endpoint(&["api", "getall"])?;
        let response = self.http.get(api_url).send().await?;
        let response = expect_success(response)?;

        response
            .json::<Vec<Song>>()
            .await
            .map_err(SongError::from_body)
    }

    /// Fetches a single song by its identifier.
    ///
    /// Any non-success status means the record is absent and is reported as
    /// [`SongError::NotFound`], distinct from a network failure.
    pub async fn get_by_id(&self, id: &str) -> Result<Song, SongError> {
        let api_url = self.endpoint(&["api", "songs", id])?;
        let response = self.http.get(api_url).send().await?;

        if !response.status().is_success() {
            return Err(SongError::NotFound { id: id.to_string() });
        }

        response.json::<Song>().await.map_err(SongError::from_body)
    }

    /// Submits a draft and returns the created record with its remote id.
    ///
    /// Any id already set on `draft` is not sent; the remote store assigns
    /// identifiers.
    pub async fn create(&self, draft: &Song) -> Result<Song, SongError> {
        let api_url = self.endpoint(&["api", "add"])?;
        let body = Song {
            id: None,
            ..draft.clone()
        };

        let response = self.http.post(api_url).json(&body).send().await?;
        let response = expect_success(response)?;

        response.json::<Song>().await.map_err(SongError::from_body)
    }

    /// Replaces the mutable fields of song `id` and returns the authoritative
    /// updated record.
    pub async fn update(&self, id: &str, fields: &SongFields) -> Result<Song, SongError> {
        let api_url = self.endpoint(&["api", "songs", id])?;
        let response = self.http.put(api_url).json(fields).send().await?;
        let response = expect_success(response)?;

        response.json::<Song>().await.map_err(SongError::from_body)
    }

    /// Deletes song `id`. The response body is not interpreted.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), SongError> {
        let api_url = self.endpoint(&["api", "songs", id])?;
        let response = self.http.delete(api_url).send().await?;
        expect_success(response)?;
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SongError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SongError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn expect_success(response: Response) -> Result<Response, SongError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SongError::Remote { status })
    }
}
