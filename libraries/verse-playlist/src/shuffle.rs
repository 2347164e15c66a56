//! Random reordering of track sequences
//!
//! [`Playlist::shuffle`](crate::Playlist::shuffle) snapshots its tracks,
//! permutes them here, and rebuilds in the new order.

use crate::types::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Permute tracks uniformly at random (Fisher-Yates)
///
/// Every ordering is equally likely; each track keeps exactly one slot, so
/// the multiset of tracks is unchanged.
pub fn shuffle_tracks(tracks: &mut [Track]) {
    tracks.shuffle(&mut thread_rng());
}
