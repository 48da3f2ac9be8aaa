//! Player signals and events
//!
//! Two directions:
//! - [`MediaSignal`]: lifecycle signals coming *from* the playback primitive
//! - [`PlayerEvent`]: notifications the controller queues for the shell

use crate::volume::VolumeIcon;
use serde::{Deserialize, Serialize};

/// Lifecycle signals emitted by the playback primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSignal {
    /// Playback actually started
    Play,
    /// Playback actually paused
    Pause,
    /// Track reached its natural end
    Ended,
    /// Duration is now known
    LoadedMetadata,
    /// A position change finished
    Seeked,
    /// Periodic position update while playing
    TimeUpdate,
}

impl MediaSignal {
    /// Parse a DOM media event name (`play`, `loadedmetadata`, ...)
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "play" => Some(MediaSignal::Play),
            "pause" => Some(MediaSignal::Pause),
            "ended" => Some(MediaSignal::Ended),
            "loadedmetadata" => Some(MediaSignal::LoadedMetadata),
            "seeked" => Some(MediaSignal::Seeked),
            "timeupdate" => Some(MediaSignal::TimeUpdate),
            _ => None,
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            MediaSignal::Play => "play",
            MediaSignal::Pause => "pause",
            MediaSignal::Ended => "ended",
            MediaSignal::LoadedMetadata => "loadedmetadata",
            MediaSignal::Seeked => "seeked",
            MediaSignal::TimeUpdate => "timeupdate",
        }
    }
}

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A track was loaded into the primitive
    TrackLoaded {
        /// Playlist index of the loaded track
        index: usize,
    },

    /// Confirmed play/pause state changed
    PlayStateChanged { is_playing: bool },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        icon: VolumeIcon,
    },

    /// A seek was sent to the primitive
    SeekRequested { position_secs: f64 },

    /// Album panel opened or closed
    PanelVisibilityChanged { open: bool },

    /// The primitive refused a play request
    PlayRequestRejected { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_round_trip() {
        for signal in [
            MediaSignal::Play,
            MediaSignal::Pause,
            MediaSignal::Ended,
            MediaSignal::LoadedMetadata,
            MediaSignal::Seeked,
            MediaSignal::TimeUpdate,
        ] {
            assert_eq!(MediaSignal::from_event_name(signal.event_name()), Some(signal));
        }
    }

    #[test]
    fn unknown_event_names_are_ignored() {
        assert_eq!(MediaSignal::from_event_name("canplay"), None);
        assert_eq!(MediaSignal::from_event_name("Play"), None);
    }
}
