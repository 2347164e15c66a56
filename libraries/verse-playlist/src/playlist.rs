//! Doubly linked playlist with a play-head cursor
//!
//! Nodes live in a slot arena and reference their neighbors by slot index,
//! so the prev/next/current graph never needs owning pointers. Removal
//! vacates a slot for reuse; surviving slot indices are never invalidated,
//! which keeps "restore the prior current node" well-defined even when the
//! playlist holds duplicate locations.

use crate::error::{PlaylistError, Result};
use crate::shuffle::shuffle_tracks;
use crate::types::Track;

/// One arena slot: a track plus non-owning links to its neighbors
#[derive(Debug, Clone)]
struct Node {
    track: Track,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered, mutable playlist with bidirectional navigation
///
/// Tracks the single "current" position the player is at. Navigation in
/// circular mode wraps tail-to-head and head-to-tail instead of stopping.
///
/// The structure is single-threaded and never blocks; callers sharing one
/// instance across threads must guard every call with their own mutex.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Node arena; `None` marks a vacated slot awaiting reuse
    slots: Vec<Option<Node>>,

    /// Vacated slot indices, reused before the arena grows
    free: Vec<usize>,

    head: Option<usize>,
    tail: Option<usize>,

    /// Play-head: a position, not an owner
    current: Option<usize>,

    len: usize,
    circular: bool,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            current: None,
            len: 0,
            circular: false,
        }
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether navigation wraps around the ends
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Enable or disable circular navigation (repeat-all)
    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    /// Track at the play-head, if any
    pub fn current(&self) -> Option<&Track> {
        self.current.map(|slot| &self.node(slot).track)
    }

    /// 0-based index of the play-head, recomputed by walking from the head
    ///
    /// Deliberately O(n): recomputing avoids index drift after arbitrary
    /// mutation. Callers needing frequent access should cache the result
    /// between mutations.
    pub fn current_index(&self) -> Option<usize> {
        let cur = self.current?;
        let mut slot = self.head?;
        let mut index = 0;
        while slot != cur {
            slot = self.node(slot).next?;
            index += 1;
        }
        Some(index)
    }

    // ===== Mutation =====

    /// Add a track at the end - O(1)
    ///
    /// On an empty playlist the new track becomes head, tail, and current.
    pub fn push_back(&mut self, track: Track) {
        let slot = self.alloc(Node {
            track,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => {
                self.node_mut(tail).next = Some(slot);
                self.tail = Some(slot);
            }
            None => {
                self.head = Some(slot);
                self.tail = Some(slot);
                self.current = Some(slot);
            }
        }

        self.len += 1;
    }

    /// Add a track at the front - O(1)
    pub fn push_front(&mut self, track: Track) {
        let slot = self.alloc(Node {
            track,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => {
                self.node_mut(head).prev = Some(slot);
                self.head = Some(slot);
            }
            None => {
                self.head = Some(slot);
                self.tail = Some(slot);
                self.current = Some(slot);
            }
        }

        self.len += 1;
    }

    /// Insert a track so it occupies `index` in head-to-tail order
    ///
    /// Valid range is `0..=len`: 0 behaves as [`push_front`](Self::push_front),
    /// `len` as [`push_back`](Self::push_back). Out of range leaves the
    /// playlist unmodified.
    pub fn insert_at(&mut self, index: usize, track: Track) -> Result<()> {
        if index > self.len {
            return Err(PlaylistError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(track);
            return Ok(());
        }
        if index == self.len {
            self.push_back(track);
            return Ok(());
        }

        // Splice before the node currently at `index`; it has a predecessor
        // because index > 0.
        let at = self.node_at(index).ok_or(PlaylistError::IndexOutOfBounds {
            index,
            len: self.len,
        })?;
        let before = self.node(at).prev.ok_or(PlaylistError::IndexOutOfBounds {
            index,
            len: self.len,
        })?;

        let slot = self.alloc(Node {
            track,
            prev: Some(before),
            next: Some(at),
        });
        self.node_mut(before).next = Some(slot);
        self.node_mut(at).prev = Some(slot);

        self.len += 1;
        Ok(())
    }

    /// Remove the track at the play-head - O(1)
    ///
    /// The play-head advances to the successor, falls back to the
    /// predecessor, or becomes unset when the playlist empties. Returns the
    /// removed track, or `None` on an empty playlist.
    pub fn remove_current(&mut self) -> Option<Track> {
        let cur = self.current?;
        let (prev, next) = {
            let node = self.node(cur);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.current = next.or(prev);

        self.len -= 1;
        Some(self.release(cur).track)
    }

    /// Remove the track at the given index
    ///
    /// The play-head keeps its prior position unless it pointed at the
    /// removed node, in which case it moves the way
    /// [`remove_current`](Self::remove_current) moves it. Prior position is
    /// tracked by node identity, not track equality, so duplicate locations
    /// behave predictably. Out of range returns `None` without mutation.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        let target = self.node_at(index)?;

        let old_current = self.current;
        self.current = Some(target);
        let removed = self.remove_current();

        if let Some(old) = old_current {
            if old != target {
                self.current = Some(old);
            }
        }

        removed
    }

    /// Discard all tracks - O(1)
    ///
    /// The whole arena is released at once rather than unlinking node by
    /// node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.current = None;
        self.len = 0;
    }

    // ===== Navigation =====

    /// Advance the play-head to the next track
    ///
    /// Wraps to the head in circular mode. Returns the track moved to, or
    /// `None` (play-head unchanged) when there is nowhere to go.
    pub fn next(&mut self) -> Option<&Track> {
        let cur = self.current?;
        let target = match self.node(cur).next {
            Some(next) => next,
            None if self.circular => self.head?,
            None => return None,
        };
        self.current = Some(target);
        Some(&self.node(target).track)
    }

    /// Move the play-head to the previous track
    ///
    /// Wraps to the tail in circular mode.
    pub fn previous(&mut self) -> Option<&Track> {
        let cur = self.current?;
        let target = match self.node(cur).prev {
            Some(prev) => prev,
            None if self.circular => self.tail?,
            None => return None,
        };
        self.current = Some(target);
        Some(&self.node(target).track)
    }

    /// Jump the play-head to the track at `index`
    ///
    /// Out of range returns `None` and leaves the play-head where it was.
    pub fn go_to(&mut self, index: usize) -> Option<&Track> {
        let slot = self.node_at(index)?;
        self.current = Some(slot);
        Some(&self.node(slot).track)
    }

    /// Jump to the first track - O(1)
    pub fn go_to_first(&mut self) -> Option<&Track> {
        let head = self.head?;
        self.current = Some(head);
        Some(&self.node(head).track)
    }

    /// Jump to the last track - O(1)
    pub fn go_to_last(&mut self) -> Option<&Track> {
        let tail = self.tail?;
        self.current = Some(tail);
        Some(&self.node(tail).track)
    }

    /// Whether a "next" move would succeed
    pub fn has_next(&self) -> bool {
        match self.current {
            Some(cur) => self.node(cur).next.is_some() || self.circular,
            None => false,
        }
    }

    /// Whether a "previous" move would succeed
    pub fn has_previous(&self) -> bool {
        match self.current {
            Some(cur) => self.node(cur).prev.is_some() || self.circular,
            None => false,
        }
    }

    // ===== Search =====

    /// Index of the first track whose title contains `needle`
    ///
    /// Case-insensitive substring match, scanning from the head.
    pub fn find_by_title(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.iter()
            .position(|track| track.title.to_lowercase().contains(&needle))
    }

    /// Track at `index` without moving the play-head
    pub fn get_at(&self, index: usize) -> Option<&Track> {
        self.node_at(index).map(|slot| &self.node(slot).track)
    }

    /// Whether some track shares `track`'s location
    pub fn contains(&self, track: &Track) -> bool {
        self.iter().any(|t| t.same_location(track))
    }

    // ===== Shuffle =====

    /// Shuffle the playlist in place, keeping the current track selected
    ///
    /// Fisher-Yates permutation of the whole track sequence, rebuilt in the
    /// new order. The play-head follows the track it pointed at (matched by
    /// location); if that track vanished it falls back to the head. No-op
    /// for fewer than two tracks.
    pub fn shuffle(&mut self) {
        if self.len <= 1 {
            return;
        }

        let mut tracks = self.to_vec();
        shuffle_tracks(&mut tracks);

        let current_location = self.current().map(|t| t.location.clone());

        self.clear();
        for track in tracks {
            self.push_back(track);
        }

        // Rebuild left the play-head at the head, which is already the
        // documented fallback.
        if let Some(location) = current_location {
            let mut slot = self.head;
            while let Some(s) = slot {
                if self.node(s).track.location == location {
                    self.current = Some(s);
                    break;
                }
                slot = self.node(s).next;
            }
        }
    }

    // ===== Iteration =====

    /// Iterate tracks in head-to-tail order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            slot: self.head,
        }
    }

    /// Collect all tracks into a vector - O(n)
    pub fn to_vec(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    // ===== Helpers =====

    /// Slot of the node at `index`, walking from whichever end is closer
    ///
    /// Halves the worst-case node visits versus a forward-only walk.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot).next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                slot = self.node(slot).prev?;
            }
            Some(slot)
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Node {
        let node = self.slots[slot].take().expect("linked slot is occupied");
        self.free.push(slot);
        node
    }

    fn node(&self, slot: usize) -> &Node {
        self.slots[slot].as_ref().expect("linked slot is occupied")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node {
        self.slots[slot].as_mut().expect("linked slot is occupied")
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over tracks in playlist order
#[derive(Debug)]
pub struct Iter<'a> {
    playlist: &'a Playlist,
    slot: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slot?;
        let node = self.playlist.node(slot);
        self.slot = node.next;
        Some(&node.track)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
