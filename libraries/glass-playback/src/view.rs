//! Visual state rendered by the shell
//!
//! The controller is the only writer. Shells read the whole struct after each
//! call (or serialize it across the WASM boundary) and paint it.

use crate::album::Album;
use crate::time::ZERO_TIME_LABEL;
use crate::volume::VolumeIcon;
use serde::{Deserialize, Serialize};

/// Glyph on the play button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayIcon {
    /// Shown while paused
    Play,
    /// Shown while playing
    Pause,
}

impl PlayIcon {
    pub fn for_playing(is_playing: bool) -> Self {
        if is_playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        }
    }

    /// Accessible label for the play button
    pub fn aria_label(self) -> &'static str {
        match self {
            PlayIcon::Play => "Play",
            PlayIcon::Pause => "Pause",
        }
    }

    /// SVG path data for a 24x24 viewbox
    pub fn svg_path(self) -> &'static str {
        match self {
            PlayIcon::Play => "M8 5v14l11-7z",
            PlayIcon::Pause => "M6 19h4V5H6v14zm8-14v14h4V5h-4z",
        }
    }
}

/// Everything the visual shell displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub title: String,
    pub artist: String,
    pub album_art: String,
    /// CSS background value
    pub background: String,

    pub play_icon: PlayIcon,

    /// Filled part of the progress bar (0-100)
    pub progress_percent: f64,
    /// Draggable thumb position (0-100)
    pub thumb_percent: f64,
    pub elapsed_label: String,
    pub total_label: String,
    /// Progress bar is in drag/seek styling
    pub seeking: bool,

    /// Volume slider value (0-100)
    pub volume: u8,
    pub volume_icon: VolumeIcon,
    /// Filled part of the volume track (0-100)
    pub volume_fill_percent: f64,
    /// Volume slider is in adjusting styling
    pub volume_adjusting: bool,

    pub panel_open: bool,
    /// Album groups, filled when the panel opens
    pub albums: Vec<Album>,
    /// One flag per playlist entry, true for the loaded track only
    pub highlighted: Vec<bool>,
}

impl PlayerView {
    pub(crate) fn new(playlist_len: usize, volume: u8) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album_art: String::new(),
            background: String::new(),
            play_icon: PlayIcon::Play,
            progress_percent: 0.0,
            thumb_percent: 0.0,
            elapsed_label: ZERO_TIME_LABEL.to_string(),
            total_label: ZERO_TIME_LABEL.to_string(),
            seeking: false,
            volume,
            volume_icon: VolumeIcon::for_level(volume),
            volume_fill_percent: f64::from(volume),
            volume_adjusting: false,
            panel_open: false,
            albums: Vec::new(),
            highlighted: vec![false; playlist_len],
        }
    }

    /// Index of the highlighted panel entry
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted.iter().position(|active| *active)
    }

    pub(crate) fn set_progress(&mut self, percent: f64, elapsed_label: String) {
        self.progress_percent = percent;
        self.thumb_percent = percent;
        self.elapsed_label = elapsed_label;
    }

    pub(crate) fn reset_progress(&mut self) {
        self.set_progress(0.0, ZERO_TIME_LABEL.to_string());
        self.total_label = ZERO_TIME_LABEL.to_string();
    }

    pub(crate) fn set_volume(&mut self, level: u8) {
        self.volume = level;
        self.volume_icon = VolumeIcon::for_level(level);
        self.volume_fill_percent = f64::from(level);
    }

    pub(crate) fn highlight(&mut self, index: usize) {
        for (i, active) in self.highlighted.iter_mut().enumerate() {
            *active = i == index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_icon_follows_state() {
        assert_eq!(PlayIcon::for_playing(true), PlayIcon::Pause);
        assert_eq!(PlayIcon::for_playing(false), PlayIcon::Play);
        assert_eq!(PlayIcon::Pause.aria_label(), "Pause");
        assert_eq!(PlayIcon::Play.aria_label(), "Play");
    }

    #[test]
    fn highlight_marks_exactly_one_entry() {
        let mut view = PlayerView::new(4, 80);
        assert_eq!(view.highlighted_index(), None);

        view.highlight(2);
        assert_eq!(view.highlighted, vec![false, false, true, false]);

        view.highlight(0);
        assert_eq!(view.highlighted_index(), Some(0));
        assert_eq!(view.highlighted.iter().filter(|h| **h).count(), 1);
    }

    #[test]
    fn volume_updates_icon_and_fill() {
        let mut view = PlayerView::new(1, 80);
        view.set_volume(35);
        assert_eq!(view.volume_icon, VolumeIcon::Low);
        assert_eq!(view.volume_fill_percent, 35.0);
    }
}
