//! Terminal shell around the player controller
//!
//! Plays the part of the page: forwards commands to the controller, pumps
//! the simulated primitive's signals, and renders the view as text.
//! Time is virtual; it only moves through [`Shell::advance`].

use crate::command::{ShellCommand, HELP};
use crate::config::ShellConfig;
use crate::error::{AppError, Result};
use glass_playback::{
    BarGeometry, PanelClickTarget, PlayIcon, PlayerController, PlayerEvent, SimulatedPrimitive,
    VolumeIcon,
};
use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, warn};
use web_time::Instant;

/// Progress bar as laid out in the terminal: pointer positions are percentages
const BAR: BarGeometry = BarGeometry {
    left: 0.0,
    width: 100.0,
};

/// Characters in the rendered progress bar
const BAR_COLUMNS: usize = 40;

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    controller: PlayerController<SimulatedPrimitive>,
    origin: Instant,
    elapsed: Duration,
    step: Duration,
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let controller = PlayerController::new(
            config.playlist()?,
            config.primitive(),
            config.player.clone(),
        )?;

        let mut shell = Self {
            controller,
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            step: config.simulation.tick(),
        };
        shell.settle();

        Ok(shell)
    }

    /// Current virtual time
    pub fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    pub fn controller(&self) -> &PlayerController<SimulatedPrimitive> {
        &self.controller
    }

    /// Run one command, writing any output to `out`
    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow> {
        let now = self.now();

        match command {
            ShellCommand::Key(code) => {
                let response = self.controller.handle_key(&code);
                if response.action.is_none() {
                    debug!(code, "Unbound key");
                }
            }
            ShellCommand::Seek { percent } => {
                if !self.controller.seek(percent, BAR) {
                    writeln!(out, "(track not ready, seek ignored)")?;
                }
            }
            ShellCommand::Drag { from, to } => {
                self.controller.progress_pointer_down(from, BAR);
                self.controller.progress_pointer_move(to, BAR, true);
                self.controller.progress_pointer_up(now);
            }
            ShellCommand::Volume(level) => self.controller.volume_input(level, now),
            ShellCommand::Wait(duration) => self.wait(duration),
            ShellCommand::OpenAlbums => self.controller.open_album_panel(),
            ShellCommand::CloseAlbums => self.controller.close_album_panel(),
            ShellCommand::Backdrop => self.controller.panel_click(PanelClickTarget::Backdrop),
            ShellCommand::Select(position) => {
                let index = position
                    .checked_sub(1)
                    .ok_or_else(|| AppError::Command("song numbers start at 1".to_string()))?;
                self.controller.select_song(index)?;
            }
            ShellCommand::Show => {}
            ShellCommand::Json => {
                self.settle();
                writeln!(out, "{}", serde_json::to_string_pretty(self.controller.view())?)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Help => {
                write!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        self.settle();
        write!(out, "{}", self.render())?;

        Ok(Flow::Continue)
    }

    /// Let `elapsed` of time pass for the primitive and the grace timers
    pub fn advance(&mut self, elapsed: Duration) {
        self.controller.primitive_mut().advance(elapsed);
        self.elapsed += elapsed;
        self.settle();
    }

    /// Advance in tick-sized steps so consecutive track ends are all seen
    fn wait(&mut self, total: Duration) {
        let mut remaining = total;

        while !remaining.is_zero() {
            let step = remaining.min(self.step);
            self.advance(step);
            remaining -= step;
        }
    }

    /// Deliver pending signals, expire timers and log what happened
    fn settle(&mut self) {
        self.controller.process_signals();
        if self.controller.primitive().has_pending_signals() {
            warn!("Signals still pending after a full drain");
        }
        self.controller.tick(self.now());

        for event in self.controller.drain_events() {
            log_event(&event);
        }
    }

    /// Text rendering of the player
    pub fn render(&self) -> String {
        let view = self.controller.view();
        let mut text = String::new();

        let state = match view.play_icon {
            PlayIcon::Pause => "playing",
            PlayIcon::Play => "paused",
        };
        let _ = writeln!(text, "[{state}] {} - {}", view.title, view.artist);

        let filled = ((view.progress_percent / 100.0) * BAR_COLUMNS as f64).round() as usize;
        let filled = filled.min(BAR_COLUMNS);
        let _ = write!(
            text,
            "  {} [{}{}] {}",
            view.elapsed_label,
            "#".repeat(filled),
            "-".repeat(BAR_COLUMNS - filled),
            view.total_label
        );
        if view.seeking {
            text.push_str("  (seeking)");
        }
        text.push('\n');

        let _ = write!(text, "  volume {:>3} [{}]", view.volume, icon_name(view.volume_icon));
        if view.volume_adjusting {
            text.push_str("  (adjusting)");
        }
        text.push('\n');

        if view.panel_open {
            text.push_str(&self.render_albums());
        }

        text
    }

    /// Album panel listing; the loaded song is marked with `*`
    pub fn render_albums(&self) -> String {
        let view = self.controller.view();
        let mut text = String::new();

        for album in &view.albums {
            let _ = writeln!(
                text,
                "  {} ({}) - {}",
                album.artist,
                album.song_count_label(),
                album.artwork_path
            );

            for song in &album.songs {
                let marker = if view.highlighted.get(song.index).copied().unwrap_or(false) {
                    '*'
                } else {
                    ' '
                };
                let _ = writeln!(
                    text,
                    "   {marker} {:>2}. {} - {}",
                    song.index + 1,
                    song.title,
                    song.artist
                );
            }
        }

        text
    }
}

fn icon_name(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => "muted",
        VolumeIcon::Low => "low",
        VolumeIcon::High => "high",
    }
}

fn log_event(event: &PlayerEvent) {
    match event {
        PlayerEvent::TrackLoaded { index } => info!(index, "Track loaded"),
        PlayerEvent::PlayStateChanged { is_playing } => info!(is_playing, "Play state changed"),
        PlayerEvent::PlayRequestRejected { reason } => warn!(reason, "Play request rejected"),
        other => debug!(?other, "Player event"),
    }
}
