//! In-memory playback primitive
//!
//! Behaves like an HTML audio element without producing sound: it keeps a
//! clock, queues lifecycle signals in the order a browser fires them, and
//! records every command so tests can assert on them.

use crate::error::{PlaybackError, Result};
use crate::events::MediaSignal;
use crate::primitive::{PlaybackPrimitive, ReadyState};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Duration used for sources without an explicit entry
const DEFAULT_DURATION_SECS: f64 = 180.0;

/// Commands received by a [`SimulatedPrimitive`]
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveCommand {
    SetSource(String),
    Load,
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
}

/// Simulated audio element
#[derive(Debug)]
pub struct SimulatedPrimitive {
    durations: HashMap<String, f64>,
    fallback_duration: f64,
    source: Option<String>,
    duration: f64,
    current_time: f64,
    volume: f64,
    paused: bool,
    ready_state: ReadyState,
    metadata_pending: bool,
    reject_play: bool,
    signals: VecDeque<MediaSignal>,
    commands: Vec<PrimitiveCommand>,
}

impl SimulatedPrimitive {
    pub fn new() -> Self {
        Self {
            durations: HashMap::new(),
            fallback_duration: DEFAULT_DURATION_SECS,
            source: None,
            duration: f64::NAN,
            current_time: 0.0,
            volume: 1.0,
            paused: true,
            ready_state: ReadyState::HaveNothing,
            metadata_pending: false,
            reject_play: false,
            signals: VecDeque::new(),
            commands: Vec::new(),
        }
    }

    /// Register the duration reported once `src` is loaded
    pub fn with_duration(mut self, src: impl Into<String>, seconds: f64) -> Self {
        self.durations.insert(src.into(), seconds);
        self
    }

    /// Duration for sources without an explicit entry
    pub fn with_fallback_duration(mut self, seconds: f64) -> Self {
        self.fallback_duration = seconds;
        self
    }

    /// Reject every play request, like a browser blocking autoplay
    pub fn rejecting_play(mut self) -> Self {
        self.reject_play = true;
        self
    }

    pub fn set_reject_play(&mut self, reject: bool) {
        self.reject_play = reject;
    }

    /// Make the pending metadata available
    ///
    /// No-op if nothing is loading.
    pub fn finish_loading(&mut self) {
        if !self.metadata_pending {
            return;
        }

        self.metadata_pending = false;
        self.duration = self
            .source
            .as_ref()
            .and_then(|src| self.durations.get(src).copied())
            .unwrap_or(self.fallback_duration);
        self.ready_state = ReadyState::HaveEnoughData;
        self.signals.push_back(MediaSignal::LoadedMetadata);
    }

    /// Let `elapsed` of wall time pass
    ///
    /// Finishes a pending load first. While playing, the position moves and a
    /// `TimeUpdate` is queued; reaching the end queues `Pause` then `Ended`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.finish_loading();

        if self.paused || !self.duration.is_finite() {
            return;
        }

        self.current_time = (self.current_time + elapsed.as_secs_f64()).min(self.duration);
        self.signals.push_back(MediaSignal::TimeUpdate);

        if self.current_time >= self.duration {
            self.paused = true;
            self.signals.push_back(MediaSignal::Pause);
            self.signals.push_back(MediaSignal::Ended);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn commands(&self) -> &[PrimitiveCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn has_pending_signals(&self) -> bool {
        !self.signals.is_empty()
    }
}

impl Default for SimulatedPrimitive {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackPrimitive for SimulatedPrimitive {
    fn set_source(&mut self, src: &str) {
        self.commands.push(PrimitiveCommand::SetSource(src.to_string()));
        self.source = Some(src.to_string());
    }

    fn load(&mut self) {
        self.commands.push(PrimitiveCommand::Load);

        if !self.paused {
            self.paused = true;
            self.signals.push_back(MediaSignal::Pause);
        }

        self.duration = f64::NAN;
        self.current_time = 0.0;
        self.ready_state = ReadyState::HaveNothing;
        self.metadata_pending = self.source.is_some();
    }

    fn play(&mut self) -> Result<()> {
        self.commands.push(PrimitiveCommand::Play);

        if self.reject_play {
            return Err(PlaybackError::PlayRejected(
                "play() is not allowed without user interaction".to_string(),
            ));
        }

        if self.source.is_none() {
            return Err(PlaybackError::PlayRejected("no source".to_string()));
        }

        if self.paused {
            self.paused = false;
            self.signals.push_back(MediaSignal::Play);
        }

        Ok(())
    }

    fn pause(&mut self) {
        self.commands.push(PrimitiveCommand::Pause);

        if !self.paused {
            self.paused = true;
            self.signals.push_back(MediaSignal::Pause);
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.commands.push(PrimitiveCommand::SetCurrentTime(seconds));

        let upper = if self.duration.is_finite() {
            self.duration
        } else {
            0.0
        };
        self.current_time = seconds.clamp(0.0, upper);
        self.signals.push_back(MediaSignal::Seeked);
    }

    fn set_volume(&mut self, volume: f64) {
        self.commands.push(PrimitiveCommand::SetVolume(volume));
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn take_signals(&mut self) -> Vec<MediaSignal> {
        self.signals.drain(..).collect()
    }
}
