/// Common test utilities for shell tests
use glass_player::{Shell, ShellConfig, ShellCommand};
use std::path::PathBuf;
use tempfile::TempDir;

/// Three tracks, two sharing artwork; one-second ticks keep simulated time exact
pub const SAMPLE_CONFIG: &str = r##"
[player]
initial_volume = 60
volume_step = 5

[simulation]
fallback_duration_secs = 120
tick_ms = 1000

[[tracks]]
title = "Rebel Saab"
artist = "Raaja Saab"
album_art_path = "songs/Rajasaab.jpg"
audio_src = "songs/rebel_saab.mp3"
background_color_start = "#0f2027"
background_color_end = "#2c5364"
duration_secs = 200

[[tracks]]
title = "Pattuma"
artist = "Love Insurance Kompany"
album_art_path = "songs/LIK.jpg"
audio_src = "songs/pattuma.mp3"
duration_secs = 3

[[tracks]]
title = "Dheema"
artist = "Love Insurance Kompany"
album_art_path = "songs/LIK.jpg"
audio_src = "songs/dheema.mp3"
"##;

pub fn sample_config() -> ShellConfig {
    ShellConfig::from_toml(SAMPLE_CONFIG).unwrap()
}

/// Write `contents` to a config file inside a fresh temp dir
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("glass.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn sample_shell() -> Shell {
    Shell::new(&sample_config()).unwrap()
}

/// Run a command and return what it printed
pub fn run(shell: &mut Shell, line: &str) -> String {
    let command: ShellCommand = line.parse().unwrap();
    let mut out = Vec::new();
    shell.execute(command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
