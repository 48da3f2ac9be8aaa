//! Volume control with mute memory
//!
//! Volume range is 0-100%, handed to the primitive as a linear 0.0-1.0 gain.
//! Muting is not a flag: it sets the level to zero and remembers the old one.

use serde::{Deserialize, Serialize};

/// Level restored by unmute when nothing has been remembered
pub const DEFAULT_UNMUTE_LEVEL: u8 = 80;

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100), mirrors the slider
    level: u8,

    /// Level captured by the last mute
    previous: Option<u8>,

    /// Used when unmuting with nothing remembered
    fallback: u8,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100)
    /// * `fallback` - Unmute level when no mute has happened yet
    pub fn new(level: u8, fallback: u8) -> Self {
        Self {
            level: level.min(100),
            previous: None,
            fallback: fallback.min(100),
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Level unmute would restore
    pub fn previous_level(&self) -> u8 {
        self.previous.unwrap_or(self.fallback)
    }

    /// Adjust by `delta`, clamped to 0-100
    ///
    /// Does not touch the remembered mute level.
    pub fn step(&mut self, delta: i16) {
        let level = (i16::from(self.level) + delta).clamp(0, 100);
        self.level = level as u8;
    }

    /// Mute if audible, otherwise restore the remembered level
    pub fn toggle_mute(&mut self) {
        if self.level > 0 {
            self.previous = Some(self.level);
            self.level = 0;
        } else {
            self.level = self.previous_level();
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.level == 0
    }

    /// Linear gain for the primitive (0.0-1.0)
    pub fn gain(&self) -> f64 {
        f64::from(self.level) / 100.0
    }

    /// Icon matching the current level
    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::for_level(self.level)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_UNMUTE_LEVEL, DEFAULT_UNMUTE_LEVEL)
    }
}

/// Volume glyph shown next to the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeIcon {
    /// Level 0
    Muted,
    /// Level 1-49
    Low,
    /// Level 50-100
    High,
}

impl VolumeIcon {
    pub fn for_level(level: u8) -> Self {
        match level {
            0 => VolumeIcon::Muted,
            1..=49 => VolumeIcon::Low,
            _ => VolumeIcon::High,
        }
    }

    /// SVG path data for a 24x24 viewbox
    pub fn svg_path(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z",
            VolumeIcon::Low => "M7 9v6h4l5 5V4l-5 5H7zm7 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02z",
            VolumeIcon::High => "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(80, 80);
        assert_eq!(vol.level(), 80);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50, 80);
        vol.set_level(75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn mute_remembers_level() {
        let mut vol = Volume::new(60, 80);

        vol.toggle_mute();
        assert_eq!(vol.level(), 0);
        assert_eq!(vol.previous_level(), 60);

        vol.toggle_mute();
        assert_eq!(vol.level(), 60);
    }

    #[test]
    fn unmute_without_memory_uses_fallback() {
        let mut vol = Volume::new(0, 80);
        vol.toggle_mute();
        assert_eq!(vol.level(), 80);
    }

    #[test]
    fn memory_survives_several_cycles() {
        let mut vol = Volume::new(35, 80);
        for _ in 0..3 {
            vol.toggle_mute();
            assert_eq!(vol.level(), 0);
            vol.toggle_mute();
            assert_eq!(vol.level(), 35);
        }
    }

    #[test]
    fn manual_zero_then_unmute_restores_older_level() {
        let mut vol = Volume::new(70, 80);
        vol.toggle_mute();
        vol.toggle_mute();

        // Slider dragged to zero by hand; memory still holds 70
        vol.set_level(0);
        vol.toggle_mute();
        assert_eq!(vol.level(), 70);
    }

    #[test]
    fn step_clamps_and_skips_memory() {
        let mut vol = Volume::new(95, 80);
        vol.step(10);
        assert_eq!(vol.level(), 100);

        vol.set_level(5);
        vol.step(-10);
        assert_eq!(vol.level(), 0);
        assert_eq!(vol.previous_level(), 80);
    }

    #[test]
    fn gain_is_linear() {
        assert_eq!(Volume::new(0, 80).gain(), 0.0);
        assert_eq!(Volume::new(50, 80).gain(), 0.5);
        assert_eq!(Volume::new(100, 80).gain(), 1.0);
    }

    #[test]
    fn icon_thresholds() {
        assert_eq!(VolumeIcon::for_level(0), VolumeIcon::Muted);
        assert_eq!(VolumeIcon::for_level(1), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(35), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(49), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(50), VolumeIcon::High);
        assert_eq!(VolumeIcon::for_level(75), VolumeIcon::High);
    }
}
