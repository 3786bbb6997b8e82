use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// A song record as stored by the remote API.
///
/// The wire names (`_id`, `img_url`, `url`) are fixed by the remote service.
/// A song without `id` is a draft that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub artist: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub year: String,
    #[serde(rename = "img_url", default, deserialize_with = "nullable_string")]
    pub image_url: String,
    #[serde(rename = "url", default, deserialize_with = "nullable_string")]
    pub audio_url: String,
}

impl Song {
    /// Returns true if the song has not been created on the remote yet.
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// An empty audio URL means the song has no audio file.
    pub fn has_audio(&self) -> bool {
        !self.audio_url.trim().is_empty()
    }

    /// Composes a `Title - Artist` string, omitting the hyphen when the
    /// artist is blank.
    ///
    /// # Example
    ///
    /// ```
    /// let song = Song { title: "Imagine".into(), artist: "John Lennon".into(), ..Default::default() };
    /// assert_eq!(song.display_title(), "Imagine - John Lennon");
    /// ```
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }

    /// Replaces a single editable field.
    ///
    /// # Arguments
    ///
    /// * `field` - Which field to change
    /// * `value` - The new text; the core does not validate it
    pub fn set_field(&mut self, field: SongField, value: String) {
        match field {
            SongField::Title => self.title = value,
            SongField::Artist => self.artist = value,
            SongField::Year => self.year = value,
            SongField::ImageUrl => self.image_url = value,
            SongField::AudioUrl => self.audio_url = value,
        }
    }

    /// Returns the current text of `field`.
    pub fn field(&self, field: SongField) -> &str {
        match field {
            SongField::Title => &self.title,
            SongField::Artist => &self.artist,
            SongField::Year => &self.year,
            SongField::ImageUrl => &self.image_url,
            SongField::AudioUrl => &self.audio_url,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for updating a song: every mutable field, never the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFields {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub img_url: String,
    pub url: String,
}

impl From<&Song> for SongFields {
    fn from(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            year: song.year.clone(),
            img_url: song.image_url.clone(),
            url: song.audio_url.clone(),
        }
    }
}

/// The user-editable fields of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
    Title,
    Artist,
    Year,
    ImageUrl,
    AudioUrl,
}

impl SongField {
    /// Every field in display order.
    pub const ALL: [SongField; 5] = [
        SongField::Title,
        SongField::Artist,
        SongField::Year,
        SongField::ImageUrl,
        SongField::AudioUrl,
    ];
}

/// Parses user input such as `title`, `img_url` or `audioUrl`, ignoring case.
impl FromStr for SongField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SongField::Title),
            "artist" => Ok(SongField::Artist),
            "year" => Ok(SongField::Year),
            "img_url" | "image" | "imageurl" | "img-url" => Ok(SongField::ImageUrl),
            "url" | "audio" | "audiourl" | "audio_url" => Ok(SongField::AudioUrl),
            other => Err(format!(
                "Unknown song field '{}'. Use one of: title, artist, year, img_url, url",
                other
            )),
        }
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SongField::Title => "title",
            SongField::Artist => "artist",
            SongField::Year => "year",
            SongField::ImageUrl => "img_url",
            SongField::AudioUrl => "url",
        };
        write!(f, "{}", name)
    }
}

/// One line of the song list table.
#[derive(Tabled)]
pub struct SongTableRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: String,
}
