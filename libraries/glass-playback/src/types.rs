//! Core types for the player controller

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable song with its display metadata
///
/// Supplied at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Path to the album artwork (also the album grouping key)
    pub album_art_path: String,

    /// Path handed to the playback primitive as its source
    pub audio_src: String,

    /// First color of the background gradient
    pub background_color_start: String,

    /// Second color of the background gradient
    pub background_color_end: String,
}

impl Track {
    /// CSS background for this track
    pub fn background_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.background_color_start, self.background_color_end
        )
    }
}

/// Snapshot of the controller's playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Index of the loaded track, always valid for the playlist
    pub current_index: usize,

    /// Mirrors the primitive's confirmed play/pause state
    pub is_playing: bool,

    /// Volume slider value (0-100)
    pub volume: u8,

    /// Level restored by unmute (0-100)
    pub previous_volume: u8,
}

/// Configuration for the player controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume (0-100, default: 80)
    pub initial_volume: u8,

    /// Level restored when unmuting with nothing remembered (default: 80)
    pub unmute_fallback_volume: u8,

    /// Keyboard volume step (default: 10)
    pub volume_step: u8,

    /// How long the progress bar stays in seeking mode after release (default: 1000ms)
    pub seek_grace_ms: u64,

    /// How long the volume slider stays in adjusting mode after input (default: 1000ms)
    pub volume_grace_ms: u64,
}

impl PlayerConfig {
    pub fn seek_grace(&self) -> Duration {
        Duration::from_millis(self.seek_grace_ms)
    }

    pub fn volume_grace(&self) -> Duration {
        Duration::from_millis(self.volume_grace_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.initial_volume > 100 {
            return Err(PlaybackError::InvalidConfig(format!(
                "initial_volume must be 0-100, got {}",
                self.initial_volume
            )));
        }

        if self.unmute_fallback_volume > 100 {
            return Err(PlaybackError::InvalidConfig(format!(
                "unmute_fallback_volume must be 0-100, got {}",
                self.unmute_fallback_volume
            )));
        }

        if self.volume_step == 0 || self.volume_step > 100 {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume_step must be 1-100, got {}",
                self.volume_step
            )));
        }

        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 80,
            unmute_fallback_volume: 80,
            volume_step: 10,
            seek_grace_ms: 1000,
            volume_grace_ms: 1000,
        }
    }
}
