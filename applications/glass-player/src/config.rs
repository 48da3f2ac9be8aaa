/// Shell configuration
use crate::error::{AppError, Result};
use glass_playback::{PlayerConfig, Playlist, SimulatedPrimitive, Track};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "glass.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default = "default_simulation")]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub tracks: Vec<TrackEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Reported duration for tracks without `duration_secs`
    #[serde(default = "default_fallback_duration_secs")]
    pub fallback_duration_secs: f64,

    /// Interval of the simulated clock in the interactive loop
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Refuse every play request, like a browser blocking autoplay
    #[serde(default)]
    pub reject_play: bool,
}

/// One `[[tracks]]` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackEntry {
    pub title: String,

    pub artist: String,

    pub album_art_path: String,

    pub audio_src: String,

    #[serde(default = "default_background_start")]
    pub background_color_start: String,

    #[serde(default = "default_background_end")]
    pub background_color_end: String,

    /// Duration the simulator reports once the track is loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl From<&TrackEntry> for Track {
    fn from(entry: &TrackEntry) -> Self {
        Track {
            title: entry.title.clone(),
            artist: entry.artist.clone(),
            album_art_path: entry.album_art_path.clone(),
            audio_src: entry.audio_src.clone(),
            background_color_start: entry.background_color_start.clone(),
            background_color_end: entry.background_color_end.clone(),
        }
    }
}

impl SimulationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl ShellConfig {
    /// Load configuration from file and environment
    ///
    /// A missing default file is fine; a missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let (config_path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if required && !config_path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        if config_path.exists() {
            settings = settings.add_source(
                config::File::from(config_path).format(config::FileFormat::Toml),
            );
        }

        // Override with environment variables (e.g. GLASS_PLAYER__INITIAL_VOLUME)
        settings = settings.add_source(
            config::Environment::with_prefix("GLASS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(source: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(AppError::Config(
                "at least one [[tracks]] entry is required".to_string(),
            ));
        }

        self.player.validate()?;

        if self.simulation.tick_ms == 0 {
            return Err(AppError::Config(
                "simulation.tick_ms must be greater than 0".to_string(),
            ));
        }

        if !is_valid_duration(self.simulation.fallback_duration_secs) {
            return Err(AppError::Config(format!(
                "simulation.fallback_duration_secs must be positive, got {}",
                self.simulation.fallback_duration_secs
            )));
        }

        for entry in &self.tracks {
            if let Some(secs) = entry.duration_secs {
                if !is_valid_duration(secs) {
                    return Err(AppError::Config(format!(
                        "duration_secs for '{}' must be positive, got {secs}",
                        entry.title
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the playlist from `[[tracks]]`
    pub fn playlist(&self) -> Result<Playlist> {
        Ok(Playlist::new(self.tracks.iter().map(Track::from).collect())?)
    }

    /// Build a simulated primitive that knows every configured duration
    pub fn primitive(&self) -> SimulatedPrimitive {
        let mut primitive = SimulatedPrimitive::new()
            .with_fallback_duration(self.simulation.fallback_duration_secs);

        for entry in &self.tracks {
            if let Some(secs) = entry.duration_secs {
                primitive = primitive.with_duration(entry.audio_src.clone(), secs);
            }
        }

        if self.simulation.reject_play {
            primitive = primitive.rejecting_play();
        }

        primitive
    }
}

fn is_valid_duration(secs: f64) -> bool {
    secs.is_finite() && secs > 0.0
}

// Default values
fn default_simulation() -> SimulationSettings {
    SimulationSettings {
        fallback_duration_secs: default_fallback_duration_secs(),
        tick_ms: default_tick_ms(),
        reject_play: false,
    }
}

fn default_fallback_duration_secs() -> f64 {
    180.0
}

fn default_tick_ms() -> u64 {
    250
}

fn default_background_start() -> String {
    "#1e3c72".to_string()
}

fn default_background_end() -> String {
    "#2a5298".to_string()
}

impl Default for SimulationSettings {
    fn default() -> Self {
        default_simulation()
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            simulation: default_simulation(),
            tracks: Vec::new(),
        }
    }
}
