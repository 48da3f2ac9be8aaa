//! Playback primitive trait
//!
//! Abstracts the host's audio element. The controller issues commands through
//! this trait and learns about the outcome only through [`MediaSignal`]s.

use crate::error::Result;
use crate::events::MediaSignal;
use serde::{Deserialize, Serialize};

/// How much media data the primitive has, mirroring `HTMLMediaElement.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadyState {
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Convert the numeric DOM value; out-of-range values saturate
    pub fn from_raw(value: u16) -> Self {
        match value {
            0 => ReadyState::HaveNothing,
            1 => ReadyState::HaveMetadata,
            2 => ReadyState::HaveCurrentData,
            3 => ReadyState::HaveFutureData,
            _ => ReadyState::HaveEnoughData,
        }
    }

    /// Metadata plus data for the current position
    pub fn can_seek(self) -> bool {
        self >= ReadyState::HaveCurrentData
    }
}

/// Host-provided audio engine
///
/// Implementors own decoding and output. Not `Send`: the controller lives on
/// a single UI thread, and browser handles cannot cross threads anyway.
pub trait PlaybackPrimitive {
    /// Set the media source path
    fn set_source(&mut self, src: &str);

    /// Reload the current source
    fn load(&mut self);

    /// Request playback
    ///
    /// The start itself is asynchronous and confirmed by [`MediaSignal::Play`].
    /// # Returns
    /// * `Ok(())` - Request accepted
    /// * `Err(_)` - Request rejected (autoplay policy, aborted load, ...)
    fn play(&mut self) -> Result<()>;

    /// Request pause, confirmed by [`MediaSignal::Pause`]
    fn pause(&mut self);

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Set output volume (0.0-1.0)
    fn set_volume(&mut self, volume: f64);

    /// Track duration in seconds; NaN until metadata is loaded
    fn duration(&self) -> f64;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    fn ready_state(&self) -> ReadyState;

    /// Signals queued since the last call
    ///
    /// Push-based hosts (DOM event listeners) deliver signals straight to the
    /// controller and keep the default.
    fn take_signals(&mut self) -> Vec<MediaSignal> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_threshold() {
        assert!(!ReadyState::HaveNothing.can_seek());
        assert!(!ReadyState::HaveMetadata.can_seek());
        assert!(ReadyState::HaveCurrentData.can_seek());
        assert!(ReadyState::HaveFutureData.can_seek());
        assert!(ReadyState::HaveEnoughData.can_seek());
    }

    #[test]
    fn raw_ready_state_conversion() {
        assert_eq!(ReadyState::from_raw(0), ReadyState::HaveNothing);
        assert_eq!(ReadyState::from_raw(2), ReadyState::HaveCurrentData);
        assert_eq!(ReadyState::from_raw(9), ReadyState::HaveEnoughData);
    }
}
