//! Core types for playlist management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One playable item's metadata and source location
///
/// Contains everything the surrounding player needs to load and display a
/// song. The `location` string (file path or URI) is the identity key: two
/// tracks are considered the same song iff their locations are equal. No
/// other field participates in identity, and duplicates by location are
/// permitted unless the caller checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// File path or URI, used as identity key
    pub location: String,

    /// Track duration in seconds (0 when unknown)
    #[serde(default)]
    pub duration_seconds: f64,

    /// Remote URL the track was derived from, if any
    #[serde(default)]
    pub external_source: Option<String>,
}

impl Track {
    /// Create a track with the required core fields
    ///
    /// Duration defaults to 0 and no external source is set; use
    /// [`with_duration`](Self::with_duration) and
    /// [`with_external_source`](Self::with_external_source) to fill those in.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            location: location.into(),
            duration_seconds: 0.0,
            external_source: None,
        }
    }

    /// Derive a track from a file path
    ///
    /// File stems of the form `"Artist - Title"` are split into the two
    /// fields; anything else becomes the title with an unknown artist.
    pub fn from_location(location: impl Into<String>) -> Self {
        let location = location.into();
        let stem = Path::new(&location)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(location.as_str());

        match stem.split_once(" - ") {
            Some((artist, title)) => {
                let (artist, title) = (artist.to_string(), title.to_string());
                Self::new(title, artist, location)
            }
            None => {
                let title = stem.to_string();
                Self::new(title, "Unknown Artist", location)
            }
        }
    }

    /// Set the duration, clamping negative values to 0
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds.max(0.0);
        self
    }

    /// Set the remote URL this track was derived from
    pub fn with_external_source(mut self, url: impl Into<String>) -> Self {
        self.external_source = Some(url.into());
        self
    }

    /// Whether two tracks refer to the same song (location equality)
    pub fn same_location(&self, other: &Track) -> bool {
        self.location == other.location
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.artist)
    }
}
