//! Fixed, non-empty playlist with circular navigation

use crate::error::{PlaybackError, Result};
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Ordered, non-empty sequence of tracks
///
/// The playlist never changes after construction, so any index produced by
/// [`Playlist::next_index`] or [`Playlist::previous_index`] stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Track>", into = "Vec<Track>")]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist, rejecting an empty track list
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        Ok(Self { tracks })
    }

    /// Number of tracks (always >= 1)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Index after `index`, wrapping to the start
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    /// Index before `index`, wrapping to the end
    pub fn previous_index(&self, index: usize) -> usize {
        let len = self.tracks.len();
        (index % len + len - 1) % len
    }
}

impl TryFrom<Vec<Track>> for Playlist {
    type Error = PlaybackError;

    fn try_from(tracks: Vec<Track>) -> Result<Self> {
        Self::new(tracks)
    }
}

impl From<Playlist> for Vec<Track> {
    fn from(playlist: Playlist) -> Self {
        playlist.tracks
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
