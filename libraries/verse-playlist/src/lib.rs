//! Verse Player - Playlist Engine
//!
//! Platform-agnostic playlist navigation engine for Verse Player.
//!
//! This crate provides:
//! - Ordered track collection with a play-head cursor
//! - Bidirectional navigation with optional circular (repeat-all) wrapping
//! - Positional edits (insert, remove) and search
//! - Fisher-Yates shuffle that keeps the selected track selected
//! - JSON snapshot persistence between sessions
//!
//! # Architecture
//!
//! `verse-playlist` is completely platform-agnostic: it never decodes audio,
//! renders UI, or fetches remote media. The surrounding application drives
//! it: the playback engine loads each track's `location` and calls
//! [`Playlist::next`] on end-of-media, a download component appends
//! fully-populated [`Track`]s (including their `external_source` URL), and
//! the presentation layer reads positions and iterates tracks to render a
//! list view.
//!
//! Every operation runs to completion synchronously; there is no internal
//! locking. Callers sharing one playlist across threads must serialize
//! access themselves.
//!
//! # Example: Building and navigating a playlist
//!
//! ```rust
//! use verse_playlist::{Playlist, Track};
//!
//! let mut playlist = Playlist::new();
//! playlist.push_back(Track::new("Around the World", "Daft Punk", "/music/atw.mp3"));
//! playlist.push_back(Track::new("One More Time", "Daft Punk", "/music/omt.mp3"));
//!
//! // The first track added is selected
//! assert_eq!(playlist.current().unwrap().title, "Around the World");
//!
//! // Advance the play-head
//! assert_eq!(playlist.next().unwrap().title, "One More Time");
//!
//! // Repeat-all: wrap from the tail back to the head
//! playlist.set_circular(true);
//! assert_eq!(playlist.next().unwrap().title, "Around the World");
//! ```
//!
//! # Example: Persistence between sessions
//!
//! ```rust,no_run
//! use verse_playlist::{Playlist, Track};
//!
//! let mut playlist = Playlist::new();
//! playlist.push_back(Track::from_location("/music/Queen - Under Pressure.mp3"));
//! playlist.save_to_file("session.json").unwrap();
//!
//! // Next session: a missing or corrupt file just yields None
//! let restored = Playlist::load_from_file("session.json");
//! ```

mod error;
mod persist;
mod playlist;
mod shuffle;
mod types;

// Public exports
pub use error::{PlaylistError, Result};
pub use persist::PlaylistSnapshot;
pub use playlist::{Iter, Playlist};
pub use types::Track;
