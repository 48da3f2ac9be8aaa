//! Album grouping for the selection panel
//!
//! Tracks sharing an artwork path form one album. The grouping is derived
//! from the playlist every time the panel opens.

use crate::playlist::Playlist;
use serde::{Deserialize, Serialize};

/// One selectable song inside an album group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSong {
    /// Absolute position in the playlist
    pub index: usize,
    pub title: String,
    pub artist: String,
}

/// Tracks sharing the same cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub artwork_path: String,
    /// Artist of the first song in the group
    pub artist: String,
    pub songs: Vec<AlbumSong>,
}

impl Album {
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// "1 song" / "N songs"
    pub fn song_count_label(&self) -> String {
        match self.songs.len() {
            1 => "1 song".to_string(),
            n => format!("{n} songs"),
        }
    }
}

/// Group tracks by artwork path, in first-seen order
pub fn group_by_artwork(playlist: &Playlist) -> Vec<Album> {
    let mut albums: Vec<Album> = Vec::new();

    for (index, track) in playlist.iter().enumerate() {
        let song = AlbumSong {
            index,
            title: track.title.clone(),
            artist: track.artist.clone(),
        };

        match albums
            .iter_mut()
            .find(|album| album.artwork_path == track.album_art_path)
        {
            Some(album) => album.songs.push(song),
            None => albums.push(Album {
                artwork_path: track.album_art_path.clone(),
                artist: track.artist.clone(),
                songs: vec![song],
            }),
        }
    }

    albums
}
