//! Player controller - core orchestration
//!
//! Keeps the playlist position, the volume and the visual state in step with
//! the playback primitive. Play state is only ever taken from the primitive's
//! own `Play`/`Pause` signals, never assumed after a request.

use crate::{
    album::group_by_artwork,
    error::{PlaybackError, Result},
    events::{MediaSignal, PlayerEvent},
    keyboard::{Key, KeyAction, KeyResponse},
    playlist::Playlist,
    primitive::PlaybackPrimitive,
    seek::{BarGeometry, SeekDrag},
    time::{format_time, progress_percent},
    timer::GraceTimer,
    types::{PlayerConfig, PlayerState},
    view::{PlayIcon, PlayerView},
    volume::Volume,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use web_time::Instant;

/// Upper bound on drain rounds per `process_signals` call
///
/// Handling a signal can queue new ones (e.g. `Ended` requests play), so the
/// drain loops, but a misbehaving primitive must not spin forever.
const MAX_SIGNAL_ROUNDS: usize = 16;

/// Where a click inside the album panel landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelClickTarget {
    /// The dimmed area around the panel content
    Backdrop,
    /// Anything inside the panel
    Content,
}

/// Central player controller
///
/// Owns everything mutable about the player:
/// - Playlist position (circular next/previous)
/// - Confirmed play state
/// - Volume with mute memory
/// - Progress bar drag + seeking grace period
/// - Album panel visibility
/// - The view model the shell renders
pub struct PlayerController<P: PlaybackPrimitive> {
    playlist: Playlist,
    primitive: P,
    config: PlayerConfig,

    // State
    current_index: usize,
    is_playing: bool,
    volume: Volume,

    // Transient UI state
    drag: SeekDrag,
    seeking: GraceTimer,
    volume_adjusting: GraceTimer,

    view: PlayerView,

    // Event queue for the shell
    pending_events: Vec<PlayerEvent>,
}

impl<P: PlaybackPrimitive> PlayerController<P> {
    /// Create the controller and load the first track
    ///
    /// Playback is not started.
    pub fn new(playlist: Playlist, primitive: P, config: PlayerConfig) -> Result<Self> {
        config.validate()?;

        let volume = Volume::new(config.initial_volume, config.unmute_fallback_volume);
        let view = PlayerView::new(playlist.len(), volume.level());

        let mut controller = Self {
            seeking: GraceTimer::new(config.seek_grace()),
            volume_adjusting: GraceTimer::new(config.volume_grace()),
            playlist,
            primitive,
            config,
            current_index: 0,
            is_playing: false,
            volume,
            drag: SeekDrag::default(),
            view,
            pending_events: Vec::new(),
        };

        controller.primitive.set_volume(controller.volume.gain());
        controller.load_index(0);

        Ok(controller)
    }

    // ===== Track Selection =====

    /// Load a track without starting it
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        if index >= self.playlist.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        self.load_index(index);
        Ok(())
    }

    /// Skip to next track, wrapping around
    ///
    /// Keeps playing if playback was active.
    pub fn play_next(&mut self) {
        let was_playing = self.is_playing;
        self.load_index(self.playlist.next_index(self.current_index));

        if was_playing {
            self.request_play();
        }
    }

    /// Go to previous track, wrapping around
    ///
    /// Keeps playing if playback was active.
    pub fn play_previous(&mut self) {
        let was_playing = self.is_playing;
        self.load_index(self.playlist.previous_index(self.current_index));

        if was_playing {
            self.request_play();
        }
    }

    /// Internal: index is always produced by the playlist itself
    fn load_index(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };

        debug!(index, title = %track.title, "Loading track");

        self.current_index = index;
        self.primitive.set_source(&track.audio_src);

        self.view.title.clone_from(&track.title);
        self.view.artist.clone_from(&track.artist);
        self.view.album_art.clone_from(&track.album_art_path);
        self.view.background = track.background_gradient();
        self.view.reset_progress();
        self.view.highlight(index);

        self.primitive.load();
        self.pending_events.push(PlayerEvent::TrackLoaded { index });
    }

    // ===== Playback Control =====

    /// Pause if playing, otherwise request playback
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.primitive.pause();
        } else {
            self.request_play();
        }
    }

    /// Internal: request playback; rejection leaves the state untouched
    fn request_play(&mut self) {
        if let Err(e) = self.primitive.play() {
            warn!(error = %e, "Play request rejected");
            self.pending_events.push(PlayerEvent::PlayRequestRejected {
                reason: e.to_string(),
            });
        }
    }

    // ===== Primitive Signals =====

    /// React to a lifecycle signal from the primitive
    ///
    /// All view updates for a signal happen inside this call.
    pub fn handle_signal(&mut self, signal: MediaSignal) {
        trace!(?signal, "Media signal");

        match signal {
            MediaSignal::Play => self.set_playing(true),
            MediaSignal::Pause => self.set_playing(false),
            MediaSignal::Ended => {
                // Auto-advance always resumes, regardless of the prior state
                self.play_next();
                self.request_play();
            }
            MediaSignal::LoadedMetadata => {
                self.view.total_label = format_time(self.primitive.duration());
            }
            MediaSignal::Seeked | MediaSignal::TimeUpdate => self.refresh_progress(),
        }
    }

    /// Drain and handle signals queued by a pull-based primitive
    ///
    /// Returns the number of signals handled.
    pub fn process_signals(&mut self) -> usize {
        let mut handled = 0;

        for _ in 0..MAX_SIGNAL_ROUNDS {
            let signals = self.primitive.take_signals();
            if signals.is_empty() {
                break;
            }

            handled += signals.len();
            for signal in signals {
                self.handle_signal(signal);
            }
        }

        handled
    }

    fn set_playing(&mut self, is_playing: bool) {
        self.view.play_icon = PlayIcon::for_playing(is_playing);

        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            debug!(is_playing, "Play state changed");
            self.pending_events
                .push(PlayerEvent::PlayStateChanged { is_playing });
        }
    }

    fn refresh_progress(&mut self) {
        let current = self.primitive.current_time();
        let percent = progress_percent(current, self.primitive.duration());
        self.view.set_progress(percent, format_time(current));
    }

    // ===== Seek =====

    /// Seek to the position under `pointer_x`
    ///
    /// Silently ignored until the primitive knows a finite duration and has
    /// data for the current position. Returns whether a seek was issued.
    pub fn seek(&mut self, pointer_x: f64, bar: BarGeometry) -> bool {
        let duration = self.primitive.duration();
        let ready = self.primitive.ready_state();

        if !duration.is_finite() || duration <= 0.0 || !ready.can_seek() {
            debug!(duration, ?ready, "Ignoring seek, media not ready");
            return false;
        }

        let position_secs = bar.fraction_at(pointer_x) * duration;
        let was_playing = self.is_playing;

        self.primitive.set_current_time(position_secs);
        self.pending_events
            .push(PlayerEvent::SeekRequested { position_secs });

        if was_playing {
            // Best effort: a refused resume is not worth surfacing
            if let Err(e) = self.primitive.play() {
                debug!(error = %e, "Resume after seek failed");
            }
        }

        true
    }

    /// Primary button pressed on the progress bar
    pub fn progress_pointer_down(&mut self, pointer_x: f64, bar: BarGeometry) {
        self.drag.press();
        self.seeking.hold();
        self.view.seeking = true;
        self.seek(pointer_x, bar);
    }

    /// Pointer moved over the progress bar
    pub fn progress_pointer_move(&mut self, pointer_x: f64, bar: BarGeometry, primary_held: bool) {
        if self.drag.should_seek_on_move(primary_held) {
            self.seek(pointer_x, bar);
        }
    }

    /// Pointer released over the progress bar
    pub fn progress_pointer_up(&mut self, now: Instant) {
        self.end_drag(now);
    }

    /// Pointer left the progress bar
    pub fn progress_pointer_leave(&mut self, now: Instant) {
        self.end_drag(now);
    }

    fn end_drag(&mut self, now: Instant) {
        if self.drag.release() {
            self.seeking.arm(now);
        }
    }

    // ===== Volume =====

    /// Volume slider input (0-100)
    pub fn volume_input(&mut self, value: u8, now: Instant) {
        self.volume.set_level(value);
        self.sync_volume();

        self.volume_adjusting.arm(now);
        self.view.volume_adjusting = true;
    }

    /// Mute, or restore the level remembered by the last mute
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.sync_volume();
    }

    /// Raise volume by one keyboard step
    pub fn volume_up(&mut self) {
        self.volume.step(i16::from(self.config.volume_step));
        self.sync_volume();
    }

    /// Lower volume by one keyboard step
    pub fn volume_down(&mut self) {
        self.volume.step(-i16::from(self.config.volume_step));
        self.sync_volume();
    }

    fn sync_volume(&mut self) {
        let level = self.volume.level();
        self.primitive.set_volume(self.volume.gain());
        self.view.set_volume(level);

        trace!(level, "Volume changed");
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level,
            icon: self.volume.icon(),
        });
    }

    // ===== Keyboard =====

    /// Handle a global key press by DOM `code`
    ///
    /// The shell should not forward keys while a text input has focus.
    pub fn handle_key(&mut self, code: &str) -> KeyResponse {
        let response = KeyResponse::for_key(Key::from_code(code));

        if let Some(action) = response.action {
            self.perform(action);
        }

        response
    }

    /// Run a bound action
    pub fn perform(&mut self, action: KeyAction) {
        match action {
            KeyAction::TogglePlay => self.toggle_play(),
            KeyAction::Next => self.play_next(),
            KeyAction::Previous => self.play_previous(),
            KeyAction::VolumeUp => self.volume_up(),
            KeyAction::VolumeDown => self.volume_down(),
            KeyAction::ToggleMute => self.toggle_mute(),
        }
    }

    // ===== Album Panel =====

    /// Show the album panel with freshly grouped albums
    pub fn open_album_panel(&mut self) {
        self.view.albums = group_by_artwork(&self.playlist);

        if !self.view.panel_open {
            self.view.panel_open = true;
            self.pending_events
                .push(PlayerEvent::PanelVisibilityChanged { open: true });
        }
    }

    pub fn close_album_panel(&mut self) {
        if self.view.panel_open {
            self.view.panel_open = false;
            self.pending_events
                .push(PlayerEvent::PanelVisibilityChanged { open: false });
        }
    }

    /// Click inside the panel overlay; only the backdrop closes it
    pub fn panel_click(&mut self, target: PanelClickTarget) {
        if target == PanelClickTarget::Backdrop {
            self.close_album_panel();
        }
    }

    /// Play a song picked from the panel and close it
    pub fn select_song(&mut self, index: usize) -> Result<()> {
        self.load_track(index)?;
        self.request_play();
        self.close_album_panel();
        Ok(())
    }

    // ===== Timers =====

    /// Expire grace periods; call from the shell's timer or frame loop
    pub fn tick(&mut self, now: Instant) {
        if self.seeking.poll(now) {
            self.view.seeking = false;
        }

        if self.volume_adjusting.poll(now) {
            self.view.volume_adjusting = false;
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlayerState {
        PlayerState {
            current_index: self.current_index,
            is_playing: self.is_playing,
            volume: self.volume.level(),
            previous_volume: self.volume.previous_level(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn view(&self) -> &PlayerView {
        &self.view
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Direct access for hosts that drive the primitive (simulation, tests)
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::{PrimitiveCommand, SimulatedPrimitive};
    use crate::types::Track;
    use crate::volume::VolumeIcon;
    use std::time::Duration;

    fn track(n: usize) -> Track {
        Track {
            title: format!("Track {n}"),
            artist: "Artist".to_string(),
            album_art_path: format!("songs/cover{}.jpg", n % 2),
            audio_src: format!("songs/{n}.mp3"),
            background_color_start: "#111111".to_string(),
            background_color_end: "#222222".to_string(),
        }
    }

    fn controller(len: usize) -> PlayerController<SimulatedPrimitive> {
        let playlist = Playlist::new((0..len).map(track).collect()).unwrap();
        PlayerController::new(playlist, SimulatedPrimitive::new(), PlayerConfig::default())
            .unwrap()
    }

    #[test]
    fn construction_loads_first_track_without_playing() {
        let player = controller(3);

        assert_eq!(player.current_index(), 0);
        assert!(!player.is_playing());
        assert_eq!(player.view().title, "Track 0");
        assert_eq!(player.view().highlighted_index(), Some(0));
        assert_eq!(player.primitive().source(), Some("songs/0.mp3"));
        assert_eq!(player.primitive().volume(), 0.8);
        assert!(player.primitive().is_paused());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let playlist = Playlist::new(vec![track(0)]).unwrap();
        let config = PlayerConfig {
            volume_step: 0,
            ..PlayerConfig::default()
        };

        assert!(matches!(
            PlayerController::new(playlist, SimulatedPrimitive::new(), config),
            Err(PlaybackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn load_track_checks_bounds() {
        let mut player = controller(2);
        assert!(matches!(
            player.load_track(2),
            Err(PlaybackError::IndexOutOfBounds(2))
        ));
        assert!(player.load_track(1).is_ok());
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn play_state_only_changes_on_signals() {
        let mut player = controller(2);

        player.toggle_play();
        assert!(!player.is_playing(), "must wait for the Play signal");

        player.process_signals();
        assert!(player.is_playing());
        assert_eq!(player.view().play_icon, PlayIcon::Pause);
    }

    #[test]
    fn next_while_paused_does_not_start_playback() {
        let mut player = controller(3);
        player.primitive_mut().clear_commands();

        player.play_next();

        assert_eq!(
            player.primitive().commands(),
            &[
                PrimitiveCommand::SetSource("songs/1.mp3".to_string()),
                PrimitiveCommand::Load,
            ]
        );
    }

    #[test]
    fn mute_event_carries_icon() {
        let mut player = controller(1);
        player.drain_events();

        player.toggle_mute();
        assert_eq!(
            player.drain_events(),
            vec![PlayerEvent::VolumeChanged {
                level: 0,
                icon: VolumeIcon::Muted
            }]
        );
    }

    #[test]
    fn volume_adjusting_flag_expires() {
        let mut player = controller(1);
        let start = Instant::now();

        player.volume_input(40, start);
        assert!(player.view().volume_adjusting);

        player.volume_input(45, start + Duration::from_millis(600));
        player.tick(start + Duration::from_millis(1100));
        assert!(player.view().volume_adjusting);

        player.tick(start + Duration::from_millis(1600));
        assert!(!player.view().volume_adjusting);
    }
}
