//! Glass Player - Playback Control
//!
//! Platform-agnostic player controller for Glass Player.
//!
//! This crate provides:
//! - A fixed, circular playlist (next/previous wrap around)
//! - Play/pause driven by the primitive's confirmed lifecycle signals
//! - Volume control (0-100%, mute with level memory, keyboard steps)
//! - Seeking from pointer position, with drag and grace-period styling
//! - Time labels and progress math that tolerate unknown durations
//! - Album grouping for the selection panel
//! - Global keyboard bindings
//!
//! # Architecture
//!
//! `glass-playback` does no audio work at all. Decoding and output belong to
//! a host *playback primitive* (a browser `<audio>` element, a native player)
//! reached through the [`PlaybackPrimitive`] trait. The controller issues
//! commands, reacts to [`MediaSignal`]s, and keeps a [`PlayerView`] that the
//! visual shell renders.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use glass_playback::{
//!     PlayerConfig, PlayerController, Playlist, SimulatedPrimitive, Track,
//! };
//! use std::time::Duration;
//!
//! let playlist = Playlist::new(vec![Track {
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     album_art_path: "songs/cover.jpg".to_string(),
//!     audio_src: "songs/song.mp3".to_string(),
//!     background_color_start: "#1e3c72".to_string(),
//!     background_color_end: "#2a5298".to_string(),
//! }])?;
//!
//! let primitive = SimulatedPrimitive::new().with_duration("songs/song.mp3", 200.0);
//! let mut player = PlayerController::new(playlist, primitive, PlayerConfig::default())?;
//!
//! player.toggle_play();
//! player.primitive_mut().advance(Duration::from_secs(50));
//! player.process_signals();
//!
//! assert!(player.is_playing());
//! assert_eq!(player.view().elapsed_label, "0:50");
//! assert_eq!(player.view().total_label, "3:20");
//! # Ok::<(), glass_playback::PlaybackError>(())
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use glass_playback::{MediaSignal, PlaybackPrimitive, ReadyState, Result};
//!
//! struct NativePlayer {
//!     // ... platform-specific handle
//! }
//!
//! impl PlaybackPrimitive for NativePlayer {
//!     fn set_source(&mut self, src: &str) {}
//!     fn load(&mut self) {}
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn set_current_time(&mut self, seconds: f64) {}
//!     fn set_volume(&mut self, volume: f64) {}
//!     fn duration(&self) -> f64 {
//!         f64::NAN
//!     }
//!     fn current_time(&self) -> f64 {
//!         0.0
//!     }
//!     fn ready_state(&self) -> ReadyState {
//!         ReadyState::HaveNothing
//!     }
//! }
//!
//! // Forward the platform's callbacks:
//! // player.handle_signal(MediaSignal::TimeUpdate);
//! ```

mod album;
mod controller;
mod error;
mod events;
mod keyboard;
mod playlist;
mod primitive;
mod seek;
mod simulated;
mod time;
mod timer;
pub mod types;
mod view;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use album::{group_by_artwork, Album, AlbumSong};
pub use controller::{PanelClickTarget, PlayerController};
pub use error::{PlaybackError, Result};
pub use events::{MediaSignal, PlayerEvent};
pub use keyboard::{Key, KeyAction, KeyResponse};
pub use playlist::Playlist;
pub use primitive::{PlaybackPrimitive, ReadyState};
pub use seek::{BarGeometry, SeekDrag};
pub use simulated::{PrimitiveCommand, SimulatedPrimitive};
pub use time::{format_time, progress_percent, ZERO_TIME_LABEL};
pub use timer::GraceTimer;
pub use types::{PlayerConfig, PlayerState, Track};
pub use view::{PlayIcon, PlayerView};
pub use volume::{Volume, VolumeIcon, DEFAULT_UNMUTE_LEVEL};

#[cfg(feature = "wasm")]
pub use wasm::{HtmlAudioPrimitive, WasmPlayer};
