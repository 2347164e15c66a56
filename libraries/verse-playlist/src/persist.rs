//! Durable serialization of playlists
//!
//! A playlist exports to a [`PlaylistSnapshot`]: the ordered track records,
//! the play-head index, and the circular flag. Snapshots round-trip through
//! JSON on disk between sessions.

use crate::error::Result;
use crate::playlist::Playlist;
use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable record of a playlist's full state
///
/// `current_index` is negative when no track was selected. Older or
/// hand-written records may omit fields; they deserialize to an empty
/// playlist with nothing selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSnapshot {
    /// Tracks in head-to-tail order
    #[serde(default)]
    pub entries: Vec<Track>,

    /// 0-based play-head index, or -1 for none
    #[serde(default = "no_current")]
    pub current_index: i64,

    /// Whether navigation wraps around the ends
    #[serde(default)]
    pub circular: bool,
}

fn no_current() -> i64 {
    -1
}

impl Playlist {
    /// Export the playlist state as a serializable snapshot
    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            entries: self.to_vec(),
            current_index: self
                .current_index()
                .map_or(no_current(), |index| index as i64),
            circular: self.is_circular(),
        }
    }

    /// Rebuild a playlist from a snapshot
    ///
    /// Tracks are appended in recorded order, then the play-head is moved to
    /// the recorded index. An invalid index is ignored, leaving the
    /// play-head at the head (the append-time bootstrap position).
    pub fn from_snapshot(snapshot: PlaylistSnapshot) -> Self {
        let mut playlist = Playlist::new();
        for track in snapshot.entries {
            playlist.push_back(track);
        }

        if snapshot.current_index >= 0 {
            let _ = playlist.go_to(snapshot.current_index as usize);
        }
        playlist.set_circular(snapshot.circular);

        playlist
    }

    /// Save the playlist as JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, json)?;
        tracing::debug!("Saved {} tracks to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a playlist from a JSON file
    ///
    /// A missing file, unreadable file, or malformed record yields `None`;
    /// the caller keeps whatever in-memory state it already had.
    pub fn load_from_file(path: impl AsRef<Path>) -> Option<Playlist> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No saved playlist at {}", path.display());
            return None;
        }

        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<PlaylistSnapshot>(&json) {
            Ok(snapshot) => Some(Playlist::from_snapshot(snapshot)),
            Err(e) => {
                tracing::warn!("Malformed playlist record {}: {}", path.display(), e);
                None
            }
        }
    }
}
